//! Planar N-body gravity core: bodies, pairwise Newtonian forces, and a
//! fixed-step explicit integrator that records a replayable trajectory per
//! body.
//!
//! The crate is deliberately free of I/O and clocks. A run is driven by
//! [`run`] (or an explicit [`Simulator`]), consumes a validated body set and
//! an immutable configuration, and returns a frozen [`TrajectorySet`] for
//! external exporters and renderers. Given identical inputs the output is
//! bit-for-bit reproducible.

pub mod body;
pub mod forces;
pub mod simulator;
pub mod trajectory;

pub use body::{Body, BodySet};
pub use simulator::{
    InvalidConfiguration, Phase, SimulationConfig, SimulationError, Simulator, run,
};
pub use trajectory::{BodyTrack, InitialState, StateSample, TrajectorySet};
