use std::path::PathBuf;

use clap::Parser;

use gravity_simulator::export;
use gravity_simulator::scenario;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Run a gravity scenario and export its trajectories"
)]
struct Cli {
    /// Scenario manifest (YAML or TOML)
    #[arg(long)]
    scenario: PathBuf,

    /// Write the trajectory table as CSV (`-` for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a JSON run summary (`-` for stdout)
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let artifacts = scenario::run_scenario_file(&cli.scenario)?;
    let tracks = &artifacts.trajectories;

    println!("=== Simulation Run ===");
    println!("Scenario : {}", artifacts.scenario.name);
    println!("Bodies   : {}", tracks.body_count());
    println!(
        "Steps    : {} x {} s ({} s simulated)",
        tracks.step_count(),
        tracks.time_step(),
        tracks.total_time()
    );
    let momentum = tracks.total_momentum();
    println!(
        "Momentum : ({:.6e}, {:.6e}) kg m/s",
        momentum[0], momentum[1]
    );
    for track in tracks.tracks() {
        let (position, velocity) = track.final_state();
        println!(
            "  {:<12} mass = {:>10.3e}  pos = ({:.4}, {:.4})  vel = ({:.4}, {:.4})",
            track.name(),
            track.mass(),
            position[0],
            position[1],
            velocity[0],
            velocity[1]
        );
    }

    if let Some(path) = &cli.csv {
        export::write_csv(path, tracks)?;
    }
    if let Some(path) = &cli.summary {
        export::write_summary(path, &artifacts.scenario, tracks)?;
    }

    Ok(())
}
