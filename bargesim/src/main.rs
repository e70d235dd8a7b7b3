use bargesim::{ScenarioConfig, Scenario, Stepping};
use bargesim::{render_all, bench_simulate};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Capsizing dynamics of a barge-crane under a displaced load")]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "reference.yaml")]
    file_name: String,

    /// Directory the SVG figures are written to
    #[arg(short, default_value = "figures")]
    out_dir: PathBuf,

    /// Displaced mass [kg], overrides `barge.m`
    #[arg(long)]
    mass: Option<f64>,

    /// Evaluate torques without the one-step lag
    #[arg(long)]
    corrected: bool,

    /// Time `simulate` across step sizes instead of plotting
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    if args.bench {
        bench_simulate()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;
    if args.corrected {
        scenario = scenario.with_stepping(Stepping::Corrected);
    }

    let thresholds = scenario.thresholds();
    info!(
        "submersion angle {:.4} rad ({:.2} deg), lift-off angle {:.4} rad ({:.2} deg)",
        thresholds.angle_max,
        thresholds.angle_max.to_degrees(),
        thresholds.angle_lift,
        thresholds.angle_lift.to_degrees()
    );

    let m = args.mass.unwrap_or(scenario.parameters.m);
    let paths = render_all(&scenario, m, &args.out_dir)?;
    info!("{} figures in {}", paths.len(), args.out_dir.display());

    Ok(())
}
