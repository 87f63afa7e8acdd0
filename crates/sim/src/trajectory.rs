//! Recorded trajectories for a completed run.

use gravity_core::stepping;
use gravity_core::vector::{self, Vector2};

/// Kinematic state recorded at the end of one integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateSample {
    pub position: Vector2,
    pub velocity: Vector2,
    pub acceleration: Vector2,
}

/// Starting state of a body, recorded before any step executes.
///
/// Acceleration is undefined before the first force evaluation, so the
/// initial state carries none; exporters write zeros for it by convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialState {
    pub position: Vector2,
    pub velocity: Vector2,
}

/// The recorded evolution of a single body: one [`StateSample`] per
/// completed step, plus the frozen initial state alongside.
///
/// Sample index `i` corresponds to simulated time `(i + 1) * time_step`;
/// the initial state is logical time 0.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyTrack {
    name: String,
    mass: f64,
    initial: InitialState,
    samples: Vec<StateSample>,
}

impl BodyTrack {
    pub(crate) fn new(name: String, mass: f64, initial: InitialState, capacity: usize) -> Self {
        Self {
            name,
            mass,
            initial,
            samples: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, sample: StateSample) {
        self.samples.push(sample);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn initial(&self) -> InitialState {
        self.initial
    }

    /// All recorded samples, in step order.
    pub fn samples(&self) -> &[StateSample] {
        &self.samples
    }

    /// Sample recorded by step `index`, if the run got that far.
    pub fn sample_at(&self, index: usize) -> Option<&StateSample> {
        self.samples.get(index)
    }

    /// Recorded positions only, for playback and rendering consumers.
    pub fn positions(&self) -> impl Iterator<Item = Vector2> + '_ {
        self.samples.iter().map(|s| s.position)
    }

    /// Number of recorded steps. Identical across all tracks of a run.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Position and velocity after the last recorded step, falling back to
    /// the initial state when no steps ran.
    pub fn final_state(&self) -> (Vector2, Vector2) {
        match self.samples.last() {
            Some(sample) => (sample.position, sample.velocity),
            None => (self.initial.position, self.initial.velocity),
        }
    }
}

/// Frozen trajectories for every body in a completed run.
///
/// Produced in full by [`Simulator::run`](crate::Simulator::run); nothing is
/// streamed mid-step. All tracks have exactly [`step_count`](Self::step_count)
/// samples, which consumers use to guard their own indexing.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectorySet {
    time_step: f64,
    step_count: usize,
    tracks: Vec<BodyTrack>,
}

impl TrajectorySet {
    pub(crate) fn new(time_step: f64, step_count: usize, tracks: Vec<BodyTrack>) -> Self {
        Self {
            time_step,
            step_count,
            tracks,
        }
    }

    /// Seconds of simulated time per recorded step.
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Number of steps recorded for every body.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Total simulated time covered by the recorded steps.
    pub fn total_time(&self) -> f64 {
        self.step_count as f64 * self.time_step
    }

    pub fn body_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn tracks(&self) -> &[BodyTrack] {
        &self.tracks
    }

    pub fn track(&self, index: usize) -> Option<&BodyTrack> {
        self.tracks.get(index)
    }

    /// Simulated time of sample `index` (see [`stepping::sample_time`]).
    pub fn sample_time(&self, index: usize) -> f64 {
        stepping::sample_time(index, self.time_step)
    }

    /// Total momentum `Σ mᵢ·vᵢ` over the final recorded state of every body.
    pub fn total_momentum(&self) -> Vector2 {
        let mut momentum = vector::ZERO;
        for track in &self.tracks {
            let (_, velocity) = track.final_state();
            momentum = vector::add(&momentum, &vector::scale(&velocity, track.mass()));
        }
        momentum
    }
}
