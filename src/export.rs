//! Mapping from trajectory data to the export crate's rows and summaries.

use std::path::Path;

use gravity_config::ScenarioConfig;
use gravity_core::vector;
use gravity_export::summary::{self, BodySummary, RunSummary};
use gravity_export::table::{self, Row};
use gravity_export::{ExportError, writer_for_path};
use gravity_sim::TrajectorySet;

/// Flatten a trajectory set into body-major CSV rows.
///
/// Per body: one row for the initial state at time 0 (acceleration zero by
/// convention), then one row per step carrying the state recorded at that
/// step, at `(step + 1) * time_step` seconds.
pub fn csv_rows(tracks: &TrajectorySet) -> Vec<Row<'_>> {
    let mut rows = Vec::with_capacity(tracks.body_count() * (tracks.step_count() + 1));
    for track in tracks.tracks() {
        let initial = track.initial();
        rows.push(Row {
            time: 0.0,
            name: track.name(),
            mass: track.mass(),
            x: initial.position[0],
            y: initial.position[1],
            vx: initial.velocity[0],
            vy: initial.velocity[1],
            ax: 0.0,
            ay: 0.0,
        });
        for (step, sample) in track.samples().iter().enumerate() {
            rows.push(Row {
                time: tracks.sample_time(step),
                name: track.name(),
                mass: track.mass(),
                x: sample.position[0],
                y: sample.position[1],
                vx: sample.velocity[0],
                vy: sample.velocity[1],
                ax: sample.acceleration[0],
                ay: sample.acceleration[1],
            });
        }
    }
    rows
}

/// Write the trajectory table as CSV to `path` (`-` for stdout).
pub fn write_csv<P: AsRef<Path>>(path: P, tracks: &TrajectorySet) -> Result<(), ExportError> {
    let writer = writer_for_path(path.as_ref())?;
    table::write_rows(writer, csv_rows(tracks))
}

/// Build the JSON run summary for a completed scenario.
pub fn run_summary(scenario: &ScenarioConfig, tracks: &TrajectorySet) -> RunSummary {
    let bodies = tracks
        .tracks()
        .iter()
        .map(|track| {
            let (position, velocity) = track.final_state();
            BodySummary {
                name: track.name().to_string(),
                mass: track.mass(),
                final_position: position,
                final_velocity: velocity,
                final_speed: vector::norm(&velocity),
            }
        })
        .collect();

    RunSummary {
        scenario: scenario.name.clone(),
        generated_utc: summary::utc_stamp(),
        time_step: tracks.time_step(),
        duration: scenario.duration,
        gravitational_constant: scenario.gravitational_constant,
        softening_length: scenario.softening_length,
        steps: tracks.step_count(),
        body_count: tracks.body_count(),
        total_momentum: tracks.total_momentum(),
        bodies,
    }
}

/// Write the JSON run summary to `path` (`-` for stdout).
pub fn write_summary<P: AsRef<Path>>(
    path: P,
    scenario: &ScenarioConfig,
    tracks: &TrajectorySet,
) -> Result<(), ExportError> {
    let writer = writer_for_path(path.as_ref())?;
    summary::write_summary(writer, &run_summary(scenario, tracks))
}
