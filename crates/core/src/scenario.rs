//! Burial/exposure scenario description and validation
//!
//! A scenario is the simulation's input program: an ordered list of
//! burial/exposure segments, a fixed step size, and the choice of initial
//! ratios. Segments are immutable once built; the simulator never alters
//! phase on its own, it only follows the segment list.

use crate::core_types::units::{MegaYears, Ratio, Years};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geological phase of a scenario segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Buried below the cosmic-ray attenuation depth: decay only
    Burial,
    /// At the surface: production pushes ratios toward equilibrium
    Exposure,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Burial => write!(f, "BURIAL"),
            Phase::Exposure => write!(f, "EXPOSURE"),
        }
    }
}

/// One segment of a scenario: a phase held for a duration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Phase during this segment
    pub phase: Phase,
    /// Segment duration (must be > 0; validated by `Scenario::new`)
    pub duration: Years,
}

impl Segment {
    /// Create a burial segment
    #[must_use]
    pub fn burial(duration: Years) -> Self {
        Segment {
            phase: Phase::Burial,
            duration,
        }
    }

    /// Create an exposure segment
    #[must_use]
    pub fn exposure(duration: Years) -> Self {
        Segment {
            phase: Phase::Exposure,
            duration,
        }
    }

    /// Number of whole steps this segment contributes at step size `dt`
    ///
    /// Truncates: a segment shorter than `dt` contributes zero steps, and a
    /// duration that is not a multiple of `dt` loses its remainder.
    #[must_use]
    pub fn steps(&self, dt: Years) -> usize {
        (self.duration / dt).floor() as usize
    }
}

/// Choice of starting ratios for a run
///
/// The two historical variants of this model disagreed on the initial state
/// (production equilibrium vs. zero); this makes the choice an explicit
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InitialRatios {
    /// Start at the production ratios (infinite prior exposure)
    ProductionEquilibrium,
    /// Start with no inherited inventory
    Zero,
    /// Start from explicitly supplied ratios, e.g. derived from a finite
    /// baseline exposure
    Custom {
        /// Initial long-clock ratio
        r1: Ratio,
        /// Initial short-clock ratio
        r2: Ratio,
    },
}

/// A validated simulation program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    segments: Vec<Segment>,
    dt: Years,
    initial: InitialRatios,
}

impl Scenario {
    /// Build a scenario, failing fast on malformed input
    ///
    /// # Errors
    /// Returns `ScenarioError` if the segment list is empty, `dt` is not
    /// positive, or any segment duration is not positive.
    pub fn new(
        segments: Vec<Segment>,
        dt: Years,
        initial: InitialRatios,
    ) -> Result<Self, ScenarioError> {
        if segments.is_empty() {
            return Err(ScenarioError::EmptySegments);
        }
        if dt.value() <= 0.0 {
            return Err(ScenarioError::NonPositiveStep);
        }
        if let Some(index) = segments.iter().position(|s| s.duration.value() <= 0.0) {
            return Err(ScenarioError::NonPositiveDuration { index });
        }
        Ok(Scenario {
            segments,
            dt,
            initial,
        })
    }

    /// The classic exposure → burial → re-exposure history, durations in Myr
    ///
    /// # Errors
    /// Returns `ScenarioError` if `dt` or any duration is not positive.
    pub fn exposure_burial_re_exposure(
        exposure: MegaYears,
        burial: MegaYears,
        re_exposure: MegaYears,
        dt: Years,
        initial: InitialRatios,
    ) -> Result<Self, ScenarioError> {
        Scenario::new(
            vec![
                Segment::exposure(exposure.to_years()),
                Segment::burial(burial.to_years()),
                Segment::exposure(re_exposure.to_years()),
            ],
            dt,
            initial,
        )
    }

    /// Ordered segment list
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Fixed step size
    #[must_use]
    pub fn dt(&self) -> Years {
        self.dt
    }

    /// Initial-state choice
    #[must_use]
    pub fn initial(&self) -> InitialRatios {
        self.initial
    }

    /// Total step count over all segments
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.segments.iter().map(|s| s.steps(self.dt)).sum()
    }

    /// Simulated time actually covered after per-segment truncation
    #[must_use]
    pub fn sampled_duration(&self) -> Years {
        self.dt * self.total_steps() as f64
    }
}

/// Errors raised by scenario validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// The segment list was empty
    EmptySegments,
    /// The step size was zero or negative
    NonPositiveStep,
    /// A segment duration was zero or negative
    NonPositiveDuration {
        /// Index of the offending segment
        index: usize,
    },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::EmptySegments => write!(f, "Scenario has no segments"),
            ScenarioError::NonPositiveStep => write!(f, "Step size dt must be positive"),
            ScenarioError::NonPositiveDuration { index } => {
                write!(f, "Segment {index} has a non-positive duration")
            }
        }
    }
}

impl std::error::Error for ScenarioError {}
