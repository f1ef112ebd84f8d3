//! End-to-end validation of the burial-clock model
//!
//! Exercises the documented scenario properties: exact closed-form stepping
//! (dt-invariance), trajectory bookkeeping, the reference
//! burial/exposure/burial history, and the CSV export contract.

use approx::assert_relative_eq;
use cosmo_clock_core::export::{write_csv, CSV_HEADER};
use cosmo_clock_core::simulation::{apparent_burial_age, burial_step};
use cosmo_clock_core::{
    baseline_initial_ratios, ClockSystem, InitialRatios, MegaYears, Phase, RatioSimulator,
    RecordStatus, Scenario, Segment, Years,
};

fn standard_simulator() -> RatioSimulator {
    RatioSimulator::new(ClockSystem::standard())
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 1: Reference burial → exposure → burial history
// ═══════════════════════════════════════════════════════════════════════════════

/// The canonical scenario: 1 Myr burial, 0.5 Myr exposure, 0.5 Myr burial at
/// dt = 5 kyr from production equilibrium. 401 records, strictly increasing
/// time ending at 2 Myr, ratios falling through burial and recovering
/// toward 7.0/3.0 through exposure.
#[test]
fn test_reference_burial_cycle() {
    let sim = standard_simulator();
    let scenario = Scenario::new(
        vec![
            Segment::burial(Years::new(1.0e6)),
            Segment::exposure(Years::new(0.5e6)),
            Segment::burial(Years::new(0.5e6)),
        ],
        Years::new(5_000.0),
        InitialRatios::ProductionEquilibrium,
    )
    .unwrap();

    let trajectory = sim.run(&scenario);

    // 1 START + 200 + 100 + 100 step records
    assert_eq!(trajectory.len(), 401);

    let records = trajectory.records();
    assert_eq!(records[0].status, RecordStatus::Start);
    assert_eq!(
        records.iter().filter(|r| r.status == RecordStatus::Burial).count(),
        300
    );
    assert_eq!(
        records
            .iter()
            .filter(|r| r.status == RecordStatus::Exposure)
            .count(),
        100
    );

    // Strictly increasing cumulative time, ending at the sampled duration
    for pair in records.windows(2) {
        assert!(pair[1].t_cumulative > pair[0].t_cumulative);
    }
    assert_eq!(records[400].t_cumulative, Years::new(2.0e6));

    // Ratios strictly decrease through the first burial segment
    for pair in records[0..=200].windows(2) {
        assert!(pair[1].r1 < pair[0].r1, "r1 must fall during burial");
        assert!(pair[1].r2 < pair[0].r2, "r2 must fall during burial");
    }

    // ...and rise back toward the production ratios through the exposure
    let after_burial = records[200];
    let after_exposure = records[300];
    assert!(after_exposure.r1 > after_burial.r1);
    assert!(after_exposure.r2 > after_burial.r2);
    assert!(after_exposure.r1 < 7.0);
    assert!(after_exposure.r2 < 3.0);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 2: Closed-form stepping is independent of dt
// ═══════════════════════════════════════════════════════════════════════════════

/// Burial-only run matches R(0)·exp(−Δλ·T) whatever dt is chosen.
#[test]
fn test_burial_run_is_dt_invariant() {
    let system = ClockSystem::standard();
    let sim = RatioSimulator::new(system.clone());
    let delta = system.long_clock.tracked.decay_constant() - system.reference.decay_constant();

    let expected = 7.0 * (-(delta * Years::new(1.0e6))).exp();

    for dt in [2_500.0, 5_000.0, 20_000.0, 100_000.0] {
        let scenario = Scenario::new(
            vec![Segment::burial(Years::new(1.0e6))],
            Years::new(dt),
            InitialRatios::ProductionEquilibrium,
        )
        .unwrap();
        let last = *sim.run(&scenario).last().unwrap();

        assert_eq!(last.t_cumulative, Years::new(1.0e6));
        assert_relative_eq!(last.r1.value(), expected, max_relative = 1e-11);
    }
}

/// Exposure-only run matches Rp − (Rp − R(0))·exp(−Δλ·T) whatever dt is
/// chosen.
#[test]
fn test_exposure_run_is_dt_invariant() {
    let system = ClockSystem::standard();
    let sim = RatioSimulator::new(system.clone());
    let delta = system.short_clock.tracked.decay_constant() - system.reference.decay_constant();

    let r0 = 1.2;
    let expected = 3.0 - (3.0 - r0) * (-(delta * Years::new(0.6e6))).exp();

    for dt in [3_000.0, 6_000.0, 30_000.0] {
        let scenario = Scenario::new(
            vec![Segment::exposure(Years::new(0.6e6))],
            Years::new(dt),
            InitialRatios::Custom {
                r1: cosmo_clock_core::Ratio::new(2.0),
                r2: cosmo_clock_core::Ratio::new(r0),
            },
        )
        .unwrap();
        let last = *sim.run(&scenario).last().unwrap();

        assert_relative_eq!(last.r2.value(), expected, max_relative = 1e-11);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 3: Trajectory bookkeeping and boundary cases
// ═══════════════════════════════════════════════════════════════════════════════

/// Record count is 1 + Σ floor(duration/dt) and the final time is the
/// truncated sampled duration, not the nominal segment total.
#[test]
fn test_truncated_durations_drop_remainders() {
    let sim = standard_simulator();
    // 17_500 → 3 steps, 4_000 → 0 steps, 11_000 → 2 steps at dt = 5_000
    let scenario = Scenario::new(
        vec![
            Segment::burial(Years::new(17_500.0)),
            Segment::exposure(Years::new(4_000.0)),
            Segment::burial(Years::new(11_000.0)),
        ],
        Years::new(5_000.0),
        InitialRatios::ProductionEquilibrium,
    )
    .unwrap();

    let trajectory = sim.run(&scenario);
    assert_eq!(trajectory.len(), 1 + 3 + 2);
    assert_eq!(trajectory.last().unwrap().t_cumulative, Years::new(25_000.0));

    // The sub-dt exposure segment left no trace
    assert!(trajectory
        .iter()
        .all(|r| r.status != RecordStatus::Exposure));
}

/// Ratios starting at zero rise monotonically toward the production ratios
/// under sustained exposure.
#[test]
fn test_exposure_from_zero_approaches_equilibrium() {
    let sim = standard_simulator();
    let scenario = Scenario::new(
        vec![Segment::exposure(Years::new(25.0e6))],
        Years::new(10_000.0),
        InitialRatios::Zero,
    )
    .unwrap();

    let trajectory = sim.run(&scenario);
    for pair in trajectory.records().windows(2) {
        assert!(pair[1].r1 >= pair[0].r1);
        assert!(pair[1].r2 >= pair[0].r2);
        assert!(pair[1].r1 <= 7.0 && pair[1].r2 <= 3.0);
    }

    let last = trajectory.last().unwrap();
    assert_relative_eq!(last.r1.value(), 7.0, max_relative = 1e-4);
    assert_relative_eq!(last.r2.value(), 3.0, max_relative = 1e-4);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 4: Baseline initialization and apparent ages
// ═══════════════════════════════════════════════════════════════════════════════

/// A finite baseline exposure yields custom starting ratios below the
/// production ratios, and the classic picker scenario runs from them.
#[test]
fn test_classic_history_from_baseline() {
    let system = ClockSystem::standard();
    let sim = RatioSimulator::new(system.clone());
    let dt = Years::new(5_000.0);

    let initial = baseline_initial_ratios(&system, Years::new(0.5e6), dt);
    let scenario = Scenario::exposure_burial_re_exposure(
        MegaYears::new(0.5),
        MegaYears::new(1.0),
        MegaYears::new(0.5),
        dt,
        initial,
    )
    .unwrap();
    assert_eq!(scenario.segments()[0].phase, Phase::Exposure);

    let trajectory = sim.run(&scenario);
    assert_eq!(trajectory.len(), 1 + 100 + 200 + 100);

    let start = trajectory.records()[0];
    assert!(start.r1 > 0.0 && start.r1 < 7.0);
    assert!(start.r2 > 0.0 && start.r2 < 3.0);
}

/// The apparent burial age read off the long clock after a pure burial
/// equals the true burial duration.
#[test]
fn test_apparent_age_recovers_burial_duration() {
    let system = ClockSystem::standard();
    let delta = system.long_clock.tracked.decay_constant() - system.reference.decay_constant();

    let buried = burial_step(
        system.long_clock.production_ratio.value(),
        delta,
        Years::new(1.25e6),
    );
    let age = apparent_burial_age(
        cosmo_clock_core::Ratio::new(buried),
        system.long_clock.production_ratio,
        delta,
    )
    .unwrap();

    assert_relative_eq!(age.value(), 1.25e6, max_relative = 1e-9);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 5: CSV export contract
// ═══════════════════════════════════════════════════════════════════════════════

/// Exact header, one row per record, Myr time column, status strings.
#[test]
fn test_csv_contract() {
    let sim = standard_simulator();
    let scenario = Scenario::new(
        vec![
            Segment::burial(Years::new(1.0e6)),
            Segment::exposure(Years::new(0.5e6)),
        ],
        Years::new(5_000.0),
        InitialRatios::ProductionEquilibrium,
    )
    .unwrap();
    let trajectory = sim.run(&scenario);

    let mut buffer = Vec::new();
    write_csv(&mut buffer, &trajectory).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines.len(), trajectory.len() + 1);

    // First data row is the START record at t = 0 Myr
    let first: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(first[0], "0");
    assert_eq!(first[3], "START");

    // Final row sits at the sampled duration in Myr
    let last: Vec<&str> = lines.last().unwrap().split(',').collect();
    assert_eq!(last[0], "1.5");
    assert_eq!(last[3], "EXPOSURE");

    // Time column is non-decreasing
    let times: Vec<f64> = lines[1..]
        .iter()
        .map(|line| line.split(',').next().unwrap().parse().unwrap())
        .collect();
    assert!(times.windows(2).all(|pair| pair[1] >= pair[0]));
}
