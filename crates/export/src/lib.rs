//! Export helpers for CSV trajectory tables and JSON run summaries.
//!
//! Types here are deliberately decoupled from the physics crates; callers
//! flatten their trajectory data into [`table::Row`]s and a
//! [`summary::RunSummary`] and hand them to the writers.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Failure while writing an export artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to open export target: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV table: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON summary: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod table {
    use serde::Serialize;
    use std::io::Write;

    use super::ExportError;

    /// One row of the trajectory table.
    ///
    /// The serialized header is `time,name,mass,x,y,vx,vy,ax,ay`. Per body,
    /// the first row is the initial state at time 0 with zero acceleration;
    /// each following row is the state recorded by one step, at
    /// `(step + 1) * time_step` seconds.
    #[derive(Debug, Clone, Serialize)]
    pub struct Row<'a> {
        pub time: f64,
        pub name: &'a str,
        pub mass: f64,
        pub x: f64,
        pub y: f64,
        pub vx: f64,
        pub vy: f64,
        pub ax: f64,
        pub ay: f64,
    }

    /// Write the header and every row to `writer`.
    pub fn write_rows<'a, W, I>(writer: W, rows: I) -> Result<(), ExportError>
    where
        W: Write,
        I: IntoIterator<Item = Row<'a>>,
    {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

pub mod summary {
    use chrono::{SecondsFormat, Utc};
    use serde::Serialize;
    use std::io::Write;

    use super::ExportError;

    /// Final state of one body in the run summary.
    #[derive(Debug, Clone, Serialize)]
    pub struct BodySummary {
        pub name: String,
        pub mass: f64,
        pub final_position: [f64; 2],
        pub final_velocity: [f64; 2],
        pub final_speed: f64,
    }

    /// Envelope of a completed run, written as a JSON sidecar next to the
    /// trajectory table.
    #[derive(Debug, Serialize)]
    pub struct RunSummary {
        pub scenario: String,
        pub generated_utc: String,
        pub time_step: f64,
        pub duration: f64,
        pub gravitational_constant: f64,
        pub softening_length: f64,
        pub steps: usize,
        pub body_count: usize,
        pub total_momentum: [f64; 2],
        pub bodies: Vec<BodySummary>,
    }

    /// RFC 3339 UTC stamp for [`RunSummary::generated_utc`].
    pub fn utc_stamp() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Write the summary as pretty-printed JSON.
    pub fn write_summary<W: Write>(writer: W, summary: &RunSummary) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(writer, summary)?;
        Ok(())
    }
}
