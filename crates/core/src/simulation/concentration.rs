//! Absolute nuclide inventory model
//!
//! Tracks raw concentrations (atoms/g) of the reference and both tracked
//! nuclides instead of their ratios. Used to derive realistic starting
//! ratios from a finite baseline exposure: a sample exposed for only a few
//! hundred kyr sits below the production ratios, which the ratio-only model
//! cannot express on its own.
//!
//! Exposure follows the standard accumulation solution and burial is plain
//! decay:
//! - exposure: N(t) = (P/λ)·(1 − e^(−λt)) + N(0)·e^(−λt)
//! - burial:   N(t) = N(0)·e^(−λt)
//!
//! # Scientific References
//! - Lal, D. (1991). "Cosmic ray labeling of erosion surfaces"
//!   Earth and Planetary Science Letters, 104(2-4), 424-439

use crate::core_types::nuclide::ClockSystem;
use crate::core_types::units::{AtomsPerGram, AtomsPerGramPerYear, PerYear, Ratio, Years};
use crate::scenario::InitialRatios;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Exact single-step exposure update for one nuclide inventory
///
/// Accumulation toward the secular equilibrium P/λ while decaying.
#[must_use]
pub fn exposure_concentration_step(
    inventory: f64,
    production: AtomsPerGramPerYear,
    lambda: PerYear,
    dt: Years,
) -> f64 {
    let decay = (-(lambda * dt)).exp();
    (production.value() / lambda.value()) * (1.0 - decay) + inventory * decay
}

/// Exact single-step burial update for one nuclide inventory (P = 0)
#[must_use]
pub fn burial_concentration_step(inventory: f64, lambda: PerYear, dt: Years) -> f64 {
    inventory * (-(lambda * dt)).exp()
}

/// Ratio of two inventories guarded against degenerate denominators
///
/// Returns `fallback` when either operand is non-finite or the denominator
/// is not positive, so a freshly-zeroed reference inventory never produces
/// NaN ratios.
#[must_use]
pub fn safe_ratio(numerator: f64, denominator: f64, fallback: f64) -> f64 {
    if !numerator.is_finite() || !denominator.is_finite() || denominator <= 0.0 {
        return fallback;
    }
    let ratio = numerator / denominator;
    if ratio.is_finite() {
        ratio
    } else {
        fallback
    }
}

/// Concentrations of the three nuclides of a clock system
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Inventory {
    /// Reference nuclide concentration
    pub reference: AtomsPerGram,
    /// Long-memory tracked nuclide concentration
    pub long: AtomsPerGram,
    /// Short-memory tracked nuclide concentration
    pub short: AtomsPerGram,
}

impl Inventory {
    /// An empty inventory (no inherited nuclides)
    #[must_use]
    pub fn zero() -> Self {
        Inventory::default()
    }

    /// Current clock ratios, zero when the reference inventory is empty
    #[must_use]
    pub fn ratios(&self) -> (Ratio, Ratio) {
        let reference = self.reference.value();
        (
            Ratio::new(safe_ratio(self.long.value(), reference, 0.0)),
            Ratio::new(safe_ratio(self.short.value(), reference, 0.0)),
        )
    }
}

/// Integrate all three inventories through a surface exposure of the given
/// duration, starting from `initial`
///
/// Stepped with the same truncation rule as the ratio simulator: whole steps
/// of `dt`, remainder dropped.
#[must_use]
pub fn accumulate_exposure(
    system: &ClockSystem,
    initial: Inventory,
    duration: Years,
    dt: Years,
) -> Inventory {
    let lambda_ref = system.reference.decay_constant();
    let lambda_long = system.long_clock.tracked.decay_constant();
    let lambda_short = system.short_clock.tracked.decay_constant();
    let p_ref = system.reference_production;
    let p_long = system.long_clock.production_rate(p_ref);
    let p_short = system.short_clock.production_rate(p_ref);

    let steps = (duration / dt).floor() as usize;
    let mut n_ref = initial.reference.value();
    let mut n_long = initial.long.value();
    let mut n_short = initial.short.value();

    for _ in 0..steps {
        n_ref = exposure_concentration_step(n_ref, p_ref, lambda_ref, dt);
        n_long = exposure_concentration_step(n_long, p_long, lambda_long, dt);
        n_short = exposure_concentration_step(n_short, p_short, lambda_short, dt);
    }

    Inventory {
        reference: AtomsPerGram::new(n_ref),
        long: AtomsPerGram::new(n_long),
        short: AtomsPerGram::new(n_short),
    }
}

/// Starting ratios implied by a finite baseline exposure from a bare surface
///
/// Integrates all inventories from zero through `baseline` and converts the
/// result into an explicit initial-state choice for the ratio simulator.
#[must_use]
pub fn baseline_initial_ratios(system: &ClockSystem, baseline: Years, dt: Years) -> InitialRatios {
    let inventory = accumulate_exposure(system, Inventory::zero(), baseline, dt);
    let (r1, r2) = inventory.ratios();
    debug!(
        baseline_years = baseline.value(),
        r1 = r1.value(),
        r2 = r2.value(),
        "derived baseline initial ratios"
    );
    InitialRatios::Custom { r1, r2 }
}
