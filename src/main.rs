use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use vortarium::solver::diagnostics;
use vortarium::{config, Emitter, FluidSim};

struct Args {
    config: PathBuf,
    frames: Option<usize>,
}

/// Scan argv for `--config <path>` and `--frames <k>`.
fn parse_args(argv: &[String]) -> Args {
    let value_of = |name: &str| {
        argv.windows(2)
            .find(|w| w[0] == name)
            .map(|w| w[1].clone())
    };
    Args {
        config: value_of("--config")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("vortarium.yaml")),
        frames: value_of("--frames").and_then(|v| v.parse().ok()),
    }
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    let argv: Vec<String> = std::env::args().collect();
    let args = parse_args(&argv);
    let cfg = config::load(&args.config);

    let mut sim = FluidSim::new(cfg.solver_params()).context("invalid simulation parameters")?;

    let mut emitter = Emitter::plume(sim.grid());
    emitter.density_rate = cfg.emitter.density_rate;
    emitter.u_rate = cfg.emitter.u_rate;
    emitter.v_rate = cfg.emitter.v_rate;

    let frame_limit = args.frames.or((cfg.run.frames > 0).then_some(cfg.run.frames));
    let substeps = cfg.run.steps_per_frame.max(1);
    let frame_interval = Duration::from_secs_f64(1.0 / cfg.run.target_fps.max(1) as f64);

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || r.store(false, Ordering::SeqCst))
        .context("failed to set ctrl-c handler")?;

    info!(
        resolution = sim.grid().n(),
        substeps,
        dt = sim.params().dt,
        obstacle = sim.obstacle().is_some(),
        "starting simulation"
    );

    let mut frame = 0usize;
    let mut last_report = Instant::now();
    while running.load(Ordering::SeqCst) {
        if frame_limit.is_some_and(|limit| frame >= limit) {
            break;
        }
        let frame_start = Instant::now();

        emitter.apply(&mut sim);
        for _ in 0..substeps {
            sim.tick();
        }
        frame += 1;

        if last_report.elapsed() >= Duration::from_secs(1) {
            let (u, v) = sim.velocity();
            let mass = diagnostics::total_density(sim.density(), sim.grid());
            let speed = diagnostics::max_speed(u, v);
            let residual = diagnostics::max_divergence(u, v, sim.grid(), sim.obstacle());
            info!(frame, mass, speed, residual, "field diagnostics");
            last_report = Instant::now();
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_interval {
            std::thread::sleep(frame_interval - elapsed);
        }
    }

    info!(frame, "simulation stopped");
    Ok(())
}
