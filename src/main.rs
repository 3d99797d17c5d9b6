use std::error::Error;

use clap::Parser;
use tracing::info;

use rocket_flight::cli::CliArgs;
use rocket_flight::config::SimConfig;
use rocket_flight::io;
use rocket_flight::logging;
use rocket_flight::sim::{EventKind, FlightSummary, Simulation, Telemetry};

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    config.apply_cli_overrides(&args);
    config.validate()?;

    if args.dump_config {
        println!("{}", config.to_ron()?);
        return Ok(());
    }

    logging::init_logging(&config.log_level);
    if let Some(path) = &args.config {
        info!("Loaded config from {}", path.display());
    }

    // -----------------------------------------------------------------------
    // Run scripted flight
    // -----------------------------------------------------------------------
    let mut sim = Simulation::new(&config);
    let mut script = args.flight_script();
    let (trace, events) = sim.fly(&mut script, args.frames);

    if let Some(path) = &args.csv {
        io::write_trace_file(path, &trace)?;
        info!("Wrote {} telemetry rows to {}", trace.len(), path.display());
    }

    let Some(summary) = FlightSummary::from_trace(&trace) else {
        return Ok(());
    };

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    let tuning = &config.vehicle;
    println!();
    println!("====================================================================");
    println!("  ROCKET FLIGHT");
    println!("====================================================================");
    println!();
    println!("  Flight Model");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Gravity:       {:>8.3}       Thrust scale: {:>8.2}",
        tuning.gravity, tuning.thrust_scale
    );
    println!(
        "  Drag:          {:>8.3}       Max velocity: {:>8.1}",
        tuning.drag, tuning.max_velocity
    );
    println!(
        "  Bodies:        {:>8}       Stars:        {:>8}",
        sim.world().bodies().len(),
        sim.world().stars().len()
    );
    println!(
        "  Burn:          {:>8} fr    Throttle:     {:>7}%",
        args.burn_frames.min(args.frames),
        args.throttle.clamp(0, 100)
    );
    println!();

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    if events.is_empty() {
        println!("  (none)");
    }
    for e in &events {
        let what = match &e.kind {
            EventKind::BoundaryContact(edges) => {
                let names: Vec<String> = edges.iter().map(|e| format!("{:?}", e)).collect();
                format!("BOUNDARY  {}", names.join("+"))
            }
            EventKind::Approach { body } => format!("APPROACH  {}", body),
        };
        println!(
            "  frame {:>6}   {:<28} at ({:>7.0}, {:>7.0})",
            e.frame, what, e.pos.x, e.pos.y
        );
    }
    println!();

    println!("  Performance Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Max altitude:  {:>8.0}       (frame {})",
        summary.max_altitude, summary.max_altitude_frame
    );
    println!("  Max speed:     {:>8.2}", summary.max_speed);
    println!(
        "  Final:         ({:.0}, {:.0}) at speed {:.2}",
        summary.final_pos.x, summary.final_pos.y, summary.final_speed
    );
    println!("  Frames:        {:>8}       burning: {}", summary.frames - 1, summary.burn_frames);
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>6}  {:>8}  {:>8}  {:>7}  {:>8}  {:>7}  {:>5}",
        "frame", "x", "y", "speed", "altitude", "heading", "phase"
    );
    println!("  {}", "─".repeat(60));

    let sample_interval = (trace.len() / 30).max(1);
    for (i, t) in trace.iter().enumerate() {
        if i % sample_interval != 0 && i != trace.len() - 1 {
            continue;
        }
        println!(
            "  {:>6}  {:>8.1}  {:>8.1}  {:>7.2}  {:>8.1}  {:>7.1}  {:>5}",
            t.frame,
            t.pos.x,
            t.pos.y,
            t.speed,
            t.altitude,
            t.heading.to_degrees(),
            phase(t)
        );
    }

    println!();
    println!("  Simulation: {} frames", args.frames);
    println!("====================================================================");
    println!();
    Ok(())
}

fn phase(t: &Telemetry) -> &'static str {
    if t.engine_on && t.throttle > 0 {
        "BURN"
    } else if t.vel.y < 0.0 {
        "CLIMB"
    } else {
        "FALL"
    }
}
