use orbsim::{Scenario, ScenarioConfig, SimulationContext, BodyId};
use orbsim::{mass_from_slider, TimeScalePreset};
use orbsim::bench_tick;

use clap::Parser;
use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "Headless circular-orbit simulator")]
struct Args {
    /// Scenario file under `scenarios/`, the built-in solar system when omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Number of frames to run
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Pace frames at the scenario's frame rate instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Body to select before the run
    #[arg(long)]
    select: Option<String>,

    /// Mass slider position in [0, 1] applied to the selected body
    #[arg(long)]
    mass_slider: Option<f64>,

    /// Time-scale preset index (0 = 0.25x ... 5 = 8x)
    #[arg(long)]
    time_scale_preset: Option<usize>,

    /// Run the tick benchmark and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(file_name: Option<&str>) -> Result<Scenario> {
    let Some(file_name) = file_name else {
        return Ok(Scenario::solar_system());
    };

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    info!(path = %config_path.display(), bodies = scenario_cfg.bodies.len(), "loaded scenario");
    Ok(Scenario::build_scenario(scenario_cfg))
}

/// Startup input events; a rejected event is logged and skipped
fn apply_events(ctx: &mut SimulationContext, args: &Args) {
    if let Some(name) = &args.select {
        if let Err(e) = ctx.body_id(name).and_then(|id| ctx.set_selected(id)) {
            warn!("ignoring selection: {e}");
        }
    }

    if let Some(value) = args.mass_slider {
        let applied = ctx
            .original_mass(ctx.selected())
            .and_then(|original| mass_from_slider(original, value))
            .and_then(|mass| ctx.set_selected_mass(mass));
        if let Err(e) = applied {
            warn!("ignoring mass slider: {e}");
        }
    }

    if let Some(index) = args.time_scale_preset {
        match TimeScalePreset::from_index(index).and_then(|p| ctx.set_time_scale(p.factor()).map(|_| p)) {
            Ok(preset) => info!(preset = preset.label(), "time scale set"),
            Err(e) => warn!("ignoring time-scale preset: {e}"),
        }
    }
}

fn report(ctx: &SimulationContext) -> Result<()> {
    let central = ctx.central();
    info!(
        name = central.name(),
        mass = central.mass(),
        ticks = ctx.ticks(),
        time_scale = ctx.time_scale(),
        "central body"
    );

    for (i, body) in ctx.bodies().iter().enumerate() {
        let derived = ctx.query_derived(BodyId::Orbiting(i))?;
        info!(
            name = body.name(),
            mass = body.mass(),
            velocity = body.velocity(),
            angular_speed = body.angular_speed(),
            angle = body.angle(),
            x = body.position().x,
            y = body.position().y,
            period_days = derived.period / 86_400.0,
            total_energy = derived.total_energy,
            visible = body.is_visible(),
            "orbiting body"
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_tick()?;
        return Ok(());
    }

    let scenario = load_scenario(args.file_name.as_deref())?;
    let mut ctx = scenario.initialize()?;
    apply_events(&mut ctx, &args);

    let center = scenario.parameters.center();
    let interval = scenario.parameters.frame_interval();
    let started = Instant::now();

    for frame in 0..args.frames {
        let frame_start = Instant::now();
        ctx.tick(center);

        if args.realtime {
            if let Some(rest) = interval.checked_sub(frame_start.elapsed()) {
                thread::sleep(rest);
            }
        }
        if (frame + 1) % u64::from(scenario.parameters.frame_rate) == 0 {
            tracing::debug!(frame = frame + 1, "frame");
        }
    }

    info!(frames = args.frames, elapsed = ?started.elapsed(), "run finished");
    report(&ctx)?;

    Ok(())
}
