use orbsim::{bench_steps, system_names, HorizonsClient, OfflineSource, Scenario, ScenarioConfig, SystemConfig};
use orbsim::catalog::EphemerisSource;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Headless N-body orbit simulation")]
struct Args {
    /// Scenario YAML, looked up in `scenarios/` unless it is an existing path
    #[arg(short, long)]
    file: Option<String>,

    /// Built-in system key, overrides the scenario's system
    #[arg(short, long)]
    system: Option<String>,

    /// Frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Never contact the ephemeris service
    #[arg(long)]
    offline: bool,

    /// List built-in systems and exit
    #[arg(long)]
    list: bool,

    /// Run the step benchmark and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_config(args: &Args) -> Result<ScenarioConfig> {
    let mut cfg = match &args.file {
        Some(file_name) => {
            let direct = PathBuf::from(file_name);
            let config_path = if direct.exists() {
                direct
            } else {
                PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
            };
            ScenarioConfig::from_path(&config_path)
                .with_context(|| format!("loading {}", config_path.display()))?
        }
        None => ScenarioConfig::default(),
    };

    match &args.system {
        Some(key) => cfg.system = SystemConfig::catalog(key),
        None if args.file.is_none() => cfg.system = SystemConfig::catalog("TRAPPIST-1"),
        None => {}
    }

    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.list {
        for name in system_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    if args.bench {
        bench_steps();
        return Ok(());
    }

    let cfg = load_config(&args)?;

    let source: Box<dyn EphemerisSource> = if args.offline {
        Box::new(OfflineSource)
    } else {
        Box::new(HorizonsClient::new())
    };

    let mut scenario = Scenario::build_scenario(&cfg, source.as_ref())?;

    for _ in 0..args.frames {
        scenario.advance_frame();
    }

    let view = scenario.frame_view();
    info!(
        "{} after {} frames, t = {:.2}, camera r = {:.1}",
        scenario.system().name,
        scenario.frame(),
        scenario.system().t,
        view.camera.r
    );
    for d in &view.bodies {
        info!(
            "  {:<12} screen ({:5}, {:5}) depth {:9.2} radius {:3} trail {}",
            d.name,
            d.x,
            d.y,
            d.depth,
            d.radius,
            view.trails[d.index].len()
        );
    }

    Ok(())
}
