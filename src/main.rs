use efield::{ScenarioConfig, Scenario};
use efield::run_2d;
use efield::{bench_coulomb, bench_field_curve};
use clap::Parser;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Point-charge electrostatics with a live field heat-map")]
struct Args {
    /// Scenario file under `scenarios/`; the built-in three-dipole setup when omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Run the headless benchmarks instead of the viewer
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: Option<&str>) -> Result<ScenarioConfig> {
    let Some(file_name) = file_name else {
        return Ok(ScenarioConfig::default());
    };
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    ScenarioConfig::from_file(&config_path)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_coulomb();
        bench_field_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(args.file_name.as_deref())?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;
    run_2d(scenario);

    Ok(())
}
