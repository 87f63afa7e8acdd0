use std::fs;
use std::path::PathBuf;

use clap::Parser;
use plotters::prelude::*;

use gravity_simulator::scenario;
use gravity_simulator::sim::BodyTrack;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Run a gravity scenario and render its trajectories to PNG"
)]
struct Cli {
    /// Scenario manifest (YAML or TOML)
    #[arg(long)]
    scenario: PathBuf,

    #[arg(long, default_value = "artifacts/trajectories.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 900)]
    width: u32,

    #[arg(long, default_value_t = 700)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let artifacts = scenario::run_scenario_file(&cli.scenario)?;
    let tracks = artifacts.trajectories;

    if tracks.body_count() == 0 {
        return Err(anyhow::anyhow!("scenario has no bodies to plot"));
    }

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("output path contains invalid UTF-8"))?;

    // Axis ranges span the recorded coordinate extrema, initial states
    // included, with a small margin so end markers stay inside the frame.
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for track in tracks.tracks() {
        for [x, y] in track_points(track) {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    let x_pad = ((x_max - x_min) * 0.05).max(1e-9);
    let y_pad = ((y_max - y_min) * 0.05).max(1e-9);

    let root = BitMapBackend::new(output, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&artifacts.scenario.name, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(36)
        .y_label_area_size(48)
        .build_cartesian_2d(x_min - x_pad..x_max + x_pad, y_min - y_pad..y_max + y_pad)?;
    chart.configure_mesh().draw()?;

    let min_mass = tracks
        .tracks()
        .iter()
        .map(BodyTrack::mass)
        .fold(f64::INFINITY, f64::min);

    for (index, track) in tracks.tracks().iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();
        chart
            .draw_series(LineSeries::new(
                track_points(track).map(|[x, y]| (x, y)),
                &color,
            ))?
            .label(track.name())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2))
            });

        // Marker radius follows the original log mass scaling.
        let radius = ((track.mass() / min_mass).ln() + 3.0).round() as i32;
        let (position, _) = track.final_state();
        chart.draw_series(std::iter::once(Circle::new(
            (position[0], position[1]),
            radius,
            color.filled(),
        )))?;
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;
    root.present()?;

    println!("Wrote {}", cli.output.display());
    Ok(())
}

fn track_points(track: &BodyTrack) -> impl Iterator<Item = [f64; 2]> + '_ {
    std::iter::once(track.initial().position).chain(track.positions())
}
