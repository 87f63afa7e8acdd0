//! Planar N-body gravity simulation with replayable trajectory output.
//!
//! The physics core lives in `gravity_sim` and stays free of I/O; this
//! façade ties scenario manifests, the integrator, the exporters, and the
//! playback helpers together for the CLI front-ends and integration tests.

pub mod export;
pub mod scenario;

pub use gravity_config as config;
pub use gravity_core::{constants, stepping, vector};
pub use gravity_playback as playback;
pub use gravity_sim as sim;
