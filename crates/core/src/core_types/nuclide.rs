//! Cosmogenic nuclide definitions and clock-system configuration
//!
//! A burial clock reads the concentration ratio of two cosmogenic nuclides
//! with different half-lives. During surface exposure both nuclides are
//! produced at a fixed rate and their ratio relaxes toward the production
//! ratio; during burial production stops and the ratio decays at the rate
//! set by the difference of the two decay constants.
//!
//! # Scientific References
//! - Lal, D. (1991). "Cosmic ray labeling of erosion surfaces"
//!   Earth and Planetary Science Letters, 104(2-4), 424-439
//! - Granger, D.E. & Muzikar, P.F. (2001). "Dating sediment burial with
//!   in situ-produced cosmogenic nuclides"
//!   Earth and Planetary Science Letters, 188(1-2), 269-281

use crate::core_types::units::{AtomsPerGramPerYear, PerYear, Ratio, Years};
use serde::{Deserialize, Serialize};
use std::f64::consts::LN_2;

/// A single radioactive cosmogenic nuclide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nuclide {
    /// Human-readable isotope label (e.g., "10Be")
    pub name: String,
    /// Radioactive half-life
    pub half_life: Years,
}

impl Nuclide {
    /// Create a nuclide from its half-life
    pub fn new(name: impl Into<String>, half_life: Years) -> Self {
        Nuclide {
            name: name.into(),
            half_life,
        }
    }

    /// Beryllium-10, the long-lived reference nuclide (t½ = 1.4 Myr)
    #[must_use]
    pub fn beryllium_10() -> Self {
        Nuclide::new("10Be", Years::new(1.4e6))
    }

    /// Aluminium-26, the long-memory tracked nuclide (t½ = 0.717 Myr)
    #[must_use]
    pub fn aluminium_26() -> Self {
        Nuclide::new("26Al", Years::new(0.717e6))
    }

    /// Chlorine-36, the short-memory tracked nuclide (t½ = 0.301 Myr)
    #[must_use]
    pub fn chlorine_36() -> Self {
        Nuclide::new("36Cl", Years::new(0.301e6))
    }

    /// Decay constant λ = ln 2 / t½
    #[must_use]
    pub fn decay_constant(&self) -> PerYear {
        PerYear::new(LN_2 / self.half_life.value())
    }
}

/// A tracked nuclide paired with the reference: the clock hand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NuclidePair {
    /// The tracked (numerator) nuclide
    pub tracked: Nuclide,
    /// Asymptotic ratio reached under infinite exposure (Rp = P_tracked / P_ref)
    pub production_ratio: Ratio,
}

impl NuclidePair {
    /// Create a pair from a tracked nuclide and its production ratio
    #[must_use]
    pub fn new(tracked: Nuclide, production_ratio: Ratio) -> Self {
        NuclidePair {
            tracked,
            production_ratio,
        }
    }

    /// Surface production rate of the tracked nuclide, given the reference rate
    #[must_use]
    pub fn production_rate(&self, reference_rate: AtomsPerGramPerYear) -> AtomsPerGramPerYear {
        reference_rate * self.production_ratio.value()
    }
}

/// Full configuration of a two-ratio burial-clock system
///
/// Carries all decay constants and production ratios explicitly so several
/// independent systems with different nuclide pairs can coexist in one
/// process; there is no module-level state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockSystem {
    /// The reference (denominator) nuclide shared by both clocks
    pub reference: Nuclide,
    /// Surface production rate of the reference nuclide
    pub reference_production: AtomsPerGramPerYear,
    /// Long-memory clock (26Al/10Be in the standard system)
    pub long_clock: NuclidePair,
    /// Short-memory clock (36Cl/10Be in the standard system)
    pub short_clock: NuclidePair,
}

impl ClockSystem {
    /// The standard 26Al/10Be + 36Cl/10Be system
    ///
    /// Production ratios 7.0 and 3.0 relative to 10Be; reference production
    /// rate 4 atoms/g/yr at the surface.
    #[must_use]
    pub fn standard() -> Self {
        ClockSystem {
            reference: Nuclide::beryllium_10(),
            reference_production: AtomsPerGramPerYear::new(4.0),
            long_clock: NuclidePair::new(Nuclide::aluminium_26(), Ratio::new(7.0)),
            short_clock: NuclidePair::new(Nuclide::chlorine_36(), Ratio::new(3.0)),
        }
    }
}
