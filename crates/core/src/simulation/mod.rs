//! Ratio Evolution Simulator
//!
//! Advances a two-ratio burial-clock state step-by-step through a validated
//! scenario and records the full trajectory. The per-step updates are the
//! exact closed-form solutions of the governing linear ODEs, so the step
//! size only controls sampling density, never numerical accuracy.
//!
//! Governing equations for one tracked ratio R with decay-constant
//! difference Δλ = λ_tracked − λ_reference and production ratio Rp:
//! - burial:   dR/dt = −Δλ·R          → R(t) = R(0)·e^(−Δλ·t)
//! - exposure: dR/dt = Δλ·(Rp − R)    → R(t) = Rp − (Rp − R(0))·e^(−Δλ·t)
//!
//! # Scientific References
//! - Granger, D.E. & Muzikar, P.F. (2001). "Dating sediment burial with
//!   in situ-produced cosmogenic nuclides"
//!   Earth and Planetary Science Letters, 188(1-2), 269-281

pub mod concentration;

use crate::core_types::nuclide::ClockSystem;
use crate::core_types::units::{PerYearDelta, Ratio, Years};
use crate::scenario::{InitialRatios, Phase, Scenario};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Tag attached to each trajectory record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    /// The prepended initial-state record
    Start,
    /// Record produced by a burial step
    Burial,
    /// Record produced by an exposure step
    Exposure,
}

impl From<Phase> for RecordStatus {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Burial => RecordStatus::Burial,
            Phase::Exposure => RecordStatus::Exposure,
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordStatus::Start => write!(f, "START"),
            RecordStatus::Burial => write!(f, "BURIAL"),
            RecordStatus::Exposure => write!(f, "EXPOSURE"),
        }
    }
}

/// One sampled point of a simulated ratio history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryRecord {
    /// Cumulative time since the start of the scenario
    pub t_cumulative: Years,
    /// Long-memory clock ratio (26Al/10Be in the standard system)
    pub r1: Ratio,
    /// Short-memory clock ratio (36Cl/10Be in the standard system)
    pub r2: Ratio,
    /// What produced this record
    pub status: RecordStatus,
}

/// Append-only, time-ordered sequence of trajectory records
///
/// Invariants: `t_cumulative` strictly increases, and the record count is
/// `1 + Σ floor(duration_i / dt)` over the scenario's segments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trajectory {
    records: Vec<TrajectoryRecord>,
}

impl Trajectory {
    fn with_capacity(capacity: usize) -> Self {
        Trajectory {
            records: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, record: TrajectoryRecord) {
        self.records.push(record);
    }

    /// All records in time order
    #[must_use]
    pub fn records(&self) -> &[TrajectoryRecord] {
        &self.records
    }

    /// Number of records (1 + total step count)
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records have been written
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The last record, if any
    #[must_use]
    pub fn last(&self) -> Option<&TrajectoryRecord> {
        self.records.last()
    }

    /// Iterate over records in time order
    pub fn iter(&self) -> std::slice::Iter<'_, TrajectoryRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryRecord;
    type IntoIter = std::slice::Iter<'a, TrajectoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Exact single-step burial update for one tracked ratio
///
/// Closed form of dR/dt = −Δλ·R over one step: R' = R·e^(−Δλ·dt).
/// Production has stopped; the ratio shrinks because the tracked nuclide
/// decays faster than the reference.
#[must_use]
pub fn burial_step(ratio: f64, lambda_diff: PerYearDelta, dt: Years) -> f64 {
    ratio * (-(lambda_diff * dt)).exp()
}

/// Exact single-step exposure update for one tracked ratio
///
/// Closed form of dR/dt = Δλ·(Rp − R) over one step:
/// R' = R + (Rp − R)·(1 − e^(−Δλ·dt)). First-order approach to the
/// production equilibrium from either side.
#[must_use]
pub fn exposure_step(
    ratio: f64,
    production_ratio: f64,
    lambda_diff: PerYearDelta,
    dt: Years,
) -> f64 {
    ratio + (production_ratio - ratio) * (1.0 - (-(lambda_diff * dt)).exp())
}

/// Apparent burial age implied by a measured ratio
///
/// Inverts the burial decay law: t = ln(Rp / R) / (λ_tracked − λ_ref).
/// Returns `None` when the ratio carries no burial signal (at or above the
/// production ratio, zero, or non-finite input).
#[must_use]
pub fn apparent_burial_age(
    ratio: Ratio,
    production_ratio: Ratio,
    lambda_diff: PerYearDelta,
) -> Option<Years> {
    let age = (production_ratio.value() / ratio.value()).ln() / lambda_diff.value();
    if age.is_finite() && age > 0.0 {
        Some(Years::new(age))
    } else {
        None
    }
}

/// Advances clock ratios through a scenario and records the trajectory
///
/// Owns no mutable state between runs; `run` is a pure function of the
/// configured system and the scenario.
#[derive(Debug, Clone)]
pub struct RatioSimulator {
    system: ClockSystem,
}

impl RatioSimulator {
    /// Create a simulator for one clock system
    #[must_use]
    pub fn new(system: ClockSystem) -> Self {
        RatioSimulator { system }
    }

    /// The configured clock system
    #[must_use]
    pub fn system(&self) -> &ClockSystem {
        &self.system
    }

    /// Starting ratios implied by the scenario's initial-state choice
    #[must_use]
    pub fn initial_ratios(&self, initial: InitialRatios) -> (Ratio, Ratio) {
        match initial {
            InitialRatios::ProductionEquilibrium => (
                self.system.long_clock.production_ratio,
                self.system.short_clock.production_ratio,
            ),
            InitialRatios::Zero => (Ratio::new(0.0), Ratio::new(0.0)),
            InitialRatios::Custom { r1, r2 } => (r1, r2),
        }
    }

    /// Run the scenario and return the full trajectory
    ///
    /// The initial state is prepended as a START-tagged record, then each
    /// segment contributes `floor(duration / dt)` steps. Both tracked
    /// ratios are updated independently with the same phase and `dt`.
    #[must_use]
    pub fn run(&self, scenario: &Scenario) -> Trajectory {
        let dt = scenario.dt();
        let lambda_ref = self.system.reference.decay_constant();
        let dl1 = self.system.long_clock.tracked.decay_constant() - lambda_ref;
        let dl2 = self.system.short_clock.tracked.decay_constant() - lambda_ref;
        let rp1 = self.system.long_clock.production_ratio.value();
        let rp2 = self.system.short_clock.production_ratio.value();

        let (start1, start2) = self.initial_ratios(scenario.initial());
        let mut r1 = start1.value();
        let mut r2 = start2.value();
        let mut t = Years::new(0.0);

        info!(
            segments = scenario.segments().len(),
            total_steps = scenario.total_steps(),
            dt_years = dt.value(),
            "running burial-clock scenario"
        );

        let mut trajectory = Trajectory::with_capacity(1 + scenario.total_steps());
        trajectory.push(TrajectoryRecord {
            t_cumulative: t,
            r1: start1,
            r2: start2,
            status: RecordStatus::Start,
        });

        for (index, segment) in scenario.segments().iter().enumerate() {
            let steps = segment.steps(dt);
            debug!(
                segment = index,
                phase = %segment.phase,
                steps,
                "advancing segment"
            );

            for _ in 0..steps {
                match segment.phase {
                    Phase::Burial => {
                        r1 = burial_step(r1, dl1, dt);
                        r2 = burial_step(r2, dl2, dt);
                    }
                    Phase::Exposure => {
                        r1 = exposure_step(r1, rp1, dl1, dt);
                        r2 = exposure_step(r2, rp2, dl2, dt);
                    }
                }
                t += dt;
                trajectory.push(TrajectoryRecord {
                    t_cumulative: t,
                    r1: Ratio::new(r1),
                    r2: Ratio::new(r2),
                    status: segment.phase.into(),
                });
            }
        }

        trajectory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Segment;
    use approx::assert_relative_eq;

    fn simulator() -> RatioSimulator {
        RatioSimulator::new(ClockSystem::standard())
    }

    fn delta_long() -> PerYearDelta {
        let system = ClockSystem::standard();
        system.long_clock.tracked.decay_constant() - system.reference.decay_constant()
    }

    #[test]
    fn test_burial_step_matches_closed_form() {
        let dl = delta_long();
        let dt = Years::new(5_000.0);

        // 200 steps of 5 kyr must equal one closed-form jump of 1 Myr
        let mut stepped = 7.0;
        for _ in 0..200 {
            stepped = burial_step(stepped, dl, dt);
        }
        let direct = 7.0 * (-(dl * Years::new(1.0e6))).exp();
        assert_relative_eq!(stepped, direct, max_relative = 1e-12);
    }

    #[test]
    fn test_exposure_step_matches_closed_form() {
        let dl = delta_long();
        let dt = Years::new(5_000.0);

        let mut stepped = 2.0;
        for _ in 0..100 {
            stepped = exposure_step(stepped, 7.0, dl, dt);
        }
        let direct = 7.0 - (7.0 - 2.0) * (-(dl * Years::new(0.5e6))).exp();
        assert_relative_eq!(stepped, direct, max_relative = 1e-12);
    }

    #[test]
    fn test_exposure_converges_monotonically_from_both_sides() {
        let dl = delta_long();
        let dt = Years::new(5_000.0);

        let mut from_below = 0.0;
        let mut from_above = 10.0;
        // 50 Myr of exposure, many relaxation times for both clocks
        for _ in 0..10_000 {
            let next_below = exposure_step(from_below, 7.0, dl, dt);
            let next_above = exposure_step(from_above, 7.0, dl, dt);
            assert!(next_below >= from_below && next_below <= 7.0);
            assert!(next_above <= from_above && next_above >= 7.0);
            from_below = next_below;
            from_above = next_above;
        }
        assert_relative_eq!(from_below, 7.0, max_relative = 1e-3);
        assert_relative_eq!(from_above, 7.0, max_relative = 1e-3);
    }

    #[test]
    fn test_run_from_zero_rises_toward_production_ratios() {
        let sim = simulator();
        let scenario = Scenario::new(
            vec![Segment::exposure(Years::new(25.0e6))],
            Years::new(5_000.0),
            InitialRatios::Zero,
        )
        .unwrap();

        let trajectory = sim.run(&scenario);
        let last = trajectory.last().unwrap();
        assert!(last.r1 > 6.99 && last.r1 <= 7.0);
        assert!(last.r2 > 2.999 && last.r2 <= 3.0);
    }

    #[test]
    fn test_run_prepends_start_record() {
        let sim = simulator();
        let scenario = Scenario::new(
            vec![Segment::burial(Years::new(10_000.0))],
            Years::new(5_000.0),
            InitialRatios::ProductionEquilibrium,
        )
        .unwrap();

        let trajectory = sim.run(&scenario);
        assert_eq!(trajectory.len(), 3);

        let first = trajectory.records()[0];
        assert_eq!(first.status, RecordStatus::Start);
        assert_eq!(first.t_cumulative, Years::new(0.0));
        assert_eq!(first.r1, Ratio::new(7.0));
        assert_eq!(first.r2, Ratio::new(3.0));
    }

    #[test]
    fn test_sub_step_segment_contributes_no_records() {
        let sim = simulator();
        let scenario = Scenario::new(
            vec![
                Segment::burial(Years::new(10_000.0)),
                Segment::exposure(Years::new(4_000.0)), // shorter than dt
            ],
            Years::new(5_000.0),
            InitialRatios::ProductionEquilibrium,
        )
        .unwrap();

        let trajectory = sim.run(&scenario);
        assert_eq!(trajectory.len(), 3);
        assert!(trajectory
            .iter()
            .all(|r| r.status != RecordStatus::Exposure));
    }

    #[test]
    fn test_apparent_burial_age_inverts_burial() {
        let system = ClockSystem::standard();
        let dl = delta_long();
        let buried = burial_step(7.0, dl, Years::new(0.8e6));

        let age = apparent_burial_age(
            Ratio::new(buried),
            system.long_clock.production_ratio,
            dl,
        )
        .unwrap();
        assert_relative_eq!(age.value(), 0.8e6, max_relative = 1e-9);
    }

    #[test]
    fn test_apparent_burial_age_none_without_signal() {
        let system = ClockSystem::standard();
        let dl = delta_long();

        // At equilibrium there is no burial signal
        assert!(apparent_burial_age(Ratio::new(7.0), system.long_clock.production_ratio, dl)
            .is_none());
        // A zero ratio gives an infinite age
        assert!(apparent_burial_age(Ratio::new(0.0), system.long_clock.production_ratio, dl)
            .is_none());
    }
}
