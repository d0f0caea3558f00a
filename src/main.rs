use fabricsim::{CatalogConfig, Scenario, SimulationConfig};
use fabricsim::run_3d;

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "Configurations.json")]
    config_name: String,

    #[arg(short, default_value = "BodiesData.json")]
    bodies_name: String,
}

// load here to keep main clean
fn load_scenario_from_json() -> Result<Scenario> {
    let args = Args::parse();

    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");

    let config_path = data_dir.join(&args.config_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening {}", config_path.display()))?;
    let sim_cfg: SimulationConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", config_path.display()))?;

    let bodies_path = data_dir.join(&args.bodies_name);
    let file = File::open(&bodies_path)
        .with_context(|| format!("opening {}", bodies_path.display()))?;
    let catalog_cfg: CatalogConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", bodies_path.display()))?;

    Ok(Scenario::build(sim_cfg, catalog_cfg))
}

fn main() -> Result<()> {
    let scenario = load_scenario_from_json()?;

    run_3d(scenario);

    //fabricsim::bench_gravity();
    //fabricsim::bench_fabric();
    //fabricsim::bench_step_curve();

    Ok(())
}
