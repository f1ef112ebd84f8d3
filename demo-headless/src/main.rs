use clap::Parser;
use cosmo_clock_core::{
    apparent_burial_age, baseline_initial_ratios, write_csv_to_path, ClockSystem, InitialRatios,
    MegaYears, Phase, RatioSimulator, Scenario, Segment, Years,
};
use std::error::Error;

/// Burial-clock simulation demo with configurable scenario
#[derive(Parser, Debug)]
#[command(name = "cosmo-clock-demo")]
#[command(about = "Cosmogenic burial-clock simulation demo", long_about = None)]
struct Args {
    /// Initial exposure duration in Myr
    #[arg(short, long, default_value_t = 0.5)]
    exposure: f64,

    /// Burial duration in Myr
    #[arg(short, long, default_value_t = 1.0)]
    burial: f64,

    /// Re-exposure duration in Myr
    #[arg(short, long, default_value_t = 0.5)]
    re_exposure: f64,

    /// Time step in years
    #[arg(long, default_value_t = 5_000.0)]
    dt: f64,

    /// Initial ratios (equilibrium or zero)
    #[arg(short, long, default_value = "equilibrium")]
    initial: String,

    /// Derive initial ratios from a baseline exposure of this many Myr
    /// (overrides --initial)
    #[arg(long)]
    baseline: Option<f64>,

    /// Free-form segment program, e.g. "burial:1.0,exposure:0.5,burial:0.5"
    /// with durations in Myr (overrides the three-phase scenario)
    #[arg(short, long)]
    segments: Option<String>,

    /// Output CSV path
    #[arg(short, long, default_value = "calculated_clock_data.csv")]
    output: String,
}

/// Parse "phase:duration" pairs with durations in Myr
fn parse_segments(spec: &str) -> Result<Vec<Segment>, String> {
    spec.split(',')
        .map(|entry| {
            let (phase, duration) = entry
                .split_once(':')
                .ok_or_else(|| format!("segment '{entry}' is not phase:duration"))?;

            let duration: f64 = duration
                .trim()
                .parse()
                .map_err(|_| format!("segment '{entry}' has a non-numeric duration"))?;
            if duration < 0.0 {
                return Err(format!("segment '{entry}' has a negative duration"));
            }
            let duration = MegaYears::new(duration).to_years();

            match phase.trim().to_lowercase().as_str() {
                "burial" | "b" => Ok(Segment::burial(duration)),
                "exposure" | "e" => Ok(Segment::exposure(duration)),
                other => Err(format!("unknown phase '{other}'")),
            }
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    println!("=== Cosmogenic Burial-Clock Demo ===\n");

    let system = ClockSystem::standard();
    let dt = Years::new(args.dt);

    // Initial state: baseline exposure wins over the named presets
    let initial = if let Some(baseline) = args.baseline {
        println!("Initializing from a {baseline:.2} Myr baseline exposure");
        baseline_initial_ratios(&system, MegaYears::new(baseline).to_years(), dt)
    } else {
        match args.initial.to_lowercase().as_str() {
            "zero" => InitialRatios::Zero,
            "equilibrium" => InitialRatios::ProductionEquilibrium,
            other => {
                println!("Unknown initial state '{other}', using production equilibrium");
                InitialRatios::ProductionEquilibrium
            }
        }
    };

    let scenario = if let Some(spec) = &args.segments {
        Scenario::new(parse_segments(spec)?, dt, initial)?
    } else {
        println!(
            "Scenario: E {:.2} Myr -> B {:.2} Myr -> E {:.2} Myr",
            args.exposure, args.burial, args.re_exposure
        );
        Scenario::exposure_burial_re_exposure(
            MegaYears::new(args.exposure),
            MegaYears::new(args.burial),
            MegaYears::new(args.re_exposure),
            dt,
            initial,
        )?
    };

    for (index, segment) in scenario.segments().iter().enumerate() {
        println!(
            "  segment {index}: {} for {}",
            segment.phase,
            segment.duration.to_megayears()
        );
    }

    let simulator = RatioSimulator::new(system.clone());
    let trajectory = simulator.run(&scenario);
    write_csv_to_path(&args.output, &trajectory)?;

    let last = trajectory
        .last()
        .ok_or("trajectory is empty despite a validated scenario")?;
    println!("\n{} written with {} rows", args.output, trajectory.len());
    println!(
        "Final state at {}: R_26_10 = {}, R_36_10 = {}",
        last.t_cumulative.to_megayears(),
        last.r1,
        last.r2
    );

    let lambda_ref = system.reference.decay_constant();
    let clocks = [
        ("26Al/10Be", &system.long_clock, last.r1),
        ("36Cl/10Be", &system.short_clock, last.r2),
    ];
    for (label, pair, ratio) in clocks {
        let delta = pair.tracked.decay_constant() - lambda_ref;
        match apparent_burial_age(ratio, pair.production_ratio, delta) {
            Some(age) => println!("Apparent burial age ({label}): {}", age.to_megayears()),
            None => println!("Apparent burial age ({label}): no burial signal"),
        }
    }

    // A scenario that never reaches burial is worth calling out
    if scenario
        .segments()
        .iter()
        .all(|s| s.phase == Phase::Exposure)
    {
        println!("Note: exposure-only scenario, ratios only approach equilibrium");
    }

    Ok(())
}
