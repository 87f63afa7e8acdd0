//! Fixed-step explicit integrator over a validated body set.

use thiserror::Error;

use gravity_core::{constants, stepping, vector};

use crate::body::{Body, BodySet};
use crate::forces::{self, ForceError};
use crate::trajectory::{BodyTrack, InitialState, StateSample, TrajectorySet};

/// Immutable parameters of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Seconds of simulated time per integration step.
    pub time_step: f64,
    /// Total seconds of simulated time.
    pub duration: f64,
    /// Gravitational constant used by the force model.
    pub gravitational_constant: f64,
    /// Minimum-distance softening for the force model. Zero (the default)
    /// means coincident bodies fail the run instead of being clamped.
    pub softening_length: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: constants::DEFAULT_TIME_STEP,
            duration: constants::DEFAULT_DURATION,
            gravitational_constant: constants::GRAVITATIONAL_CONSTANT,
            softening_length: 0.0,
        }
    }
}

/// Reasons a run is rejected before any stepping occurs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidConfiguration {
    #[error("time_step must be positive and finite, got {0}")]
    TimeStep(f64),
    #[error("duration must be positive and finite, got {0}")]
    Duration(f64),
    #[error("gravitational_constant must be finite, got {0}")]
    GravitationalConstant(f64),
    #[error("softening_length must be non-negative and finite, got {0}")]
    SofteningLength(f64),
    #[error("body {name:?} must have positive finite mass, got {mass}")]
    BodyMass { name: String, mass: f64 },
    #[error("body {name:?} has a non-finite initial position or velocity")]
    BodyState { name: String },
}

/// Failure of a simulation run. All errors are reported to the caller and
/// never retried: the computation is deterministic, so retrying with the
/// same input changes nothing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error(transparent)]
    InvalidConfiguration(#[from] InvalidConfiguration),
    /// Two distinct bodies occupied identical coordinates when their
    /// pairwise force was evaluated, with no softening configured.
    #[error("bodies {subject:?} and {other:?} coincide at step {step}; pairwise force is undefined")]
    DegenerateGeometry {
        subject: String,
        other: String,
        step: usize,
    },
}

/// Lifecycle of a simulator. Transitions are forward-only; re-running
/// requires a fresh [`Simulator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Bodies and configuration accepted, no steps taken.
    Configured,
    /// Steps are being applied.
    Running,
    /// All steps applied, trajectories frozen.
    Complete,
}

/// Owns the mutable body state and drives the integration loop.
///
/// The loop is single-threaded and synchronous and runs to completion
/// eagerly; aborting early means dropping the simulator (no external
/// resources are held). Playback of the result is an external concern.
#[derive(Debug)]
pub struct Simulator {
    bodies: Vec<Body>,
    config: SimulationConfig,
    tracks: Vec<BodyTrack>,
    total_steps: usize,
    steps_taken: usize,
    phase: Phase,
}

impl Simulator {
    /// Validate the configuration and body set and prepare a run.
    ///
    /// All `InvalidConfiguration` cases are detected here, before any
    /// stepping; an invalid run never starts.
    pub fn new(bodies: BodySet, config: SimulationConfig) -> Result<Self, SimulationError> {
        validate(&bodies, &config)?;

        let total_steps = stepping::step_count(config.duration, config.time_step);
        let tracks = bodies
            .iter()
            .map(|body| {
                BodyTrack::new(
                    body.name().to_string(),
                    body.mass(),
                    InitialState {
                        position: body.position(),
                        velocity: body.velocity(),
                    },
                    total_steps,
                )
            })
            .collect();

        Ok(Self {
            bodies: bodies.into_inner(),
            config,
            tracks,
            total_steps,
            steps_taken: 0,
            phase: Phase::Configured,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Steps this run will apply: `floor(duration / time_step)`.
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Apply every step and freeze the trajectories.
    ///
    /// Consumes the simulator: `Complete` has no backward transition.
    pub fn run(mut self) -> Result<TrajectorySet, SimulationError> {
        self.phase = Phase::Running;
        for step in 0..self.total_steps {
            self.step(step)?;
        }
        self.phase = Phase::Complete;
        Ok(TrajectorySet::new(
            self.config.time_step,
            self.total_steps,
            self.tracks,
        ))
    }

    // Bodies update sequentially in place: a later body's force evaluation
    // within step `k` reads positions already advanced earlier in the same
    // step. This first-order artifact is reference behavior; a snapshot
    // (double-buffered) update would change every trajectory.
    fn step(&mut self, step: usize) -> Result<(), SimulationError> {
        let dt = self.config.time_step;
        for i in 0..self.bodies.len() {
            let force = forces::net_force(
                i,
                &self.bodies,
                self.config.gravitational_constant,
                self.config.softening_length,
            )
            .map_err(|err| self.degenerate(err, step))?;

            let body = &mut self.bodies[i];
            body.acceleration = [force[0] / body.mass, force[1] / body.mass];
            // Position advances on the velocity prior to this step's
            // acceleration update, then velocity follows.
            body.position = vector::add(&body.position, &vector::scale(&body.velocity, dt));
            body.velocity = vector::add(&body.velocity, &vector::scale(&body.acceleration, dt));

            let sample = StateSample {
                position: body.position,
                velocity: body.velocity,
                acceleration: body.acceleration,
            };
            self.tracks[i].push(sample);
        }
        self.steps_taken += 1;
        Ok(())
    }

    fn degenerate(&self, err: ForceError, step: usize) -> SimulationError {
        let ForceError::DegenerateGeometry { subject, other } = err;
        SimulationError::DegenerateGeometry {
            subject: self.bodies[subject].name().to_string(),
            other: self.bodies[other].name().to_string(),
            step,
        }
    }
}

/// Validate and run in one call. The sole entry point most callers need:
/// synchronous, returns only on completion.
pub fn run(bodies: BodySet, config: SimulationConfig) -> Result<TrajectorySet, SimulationError> {
    Simulator::new(bodies, config)?.run()
}

fn validate(bodies: &BodySet, config: &SimulationConfig) -> Result<(), InvalidConfiguration> {
    if !config.time_step.is_finite() || config.time_step <= 0.0 {
        return Err(InvalidConfiguration::TimeStep(config.time_step));
    }
    if !config.duration.is_finite() || config.duration <= 0.0 {
        return Err(InvalidConfiguration::Duration(config.duration));
    }
    if !config.gravitational_constant.is_finite() {
        return Err(InvalidConfiguration::GravitationalConstant(
            config.gravitational_constant,
        ));
    }
    if !config.softening_length.is_finite() || config.softening_length < 0.0 {
        return Err(InvalidConfiguration::SofteningLength(
            config.softening_length,
        ));
    }
    for body in bodies.iter() {
        if !body.mass().is_finite() || body.mass() <= 0.0 {
            return Err(InvalidConfiguration::BodyMass {
                name: body.name().to_string(),
                mass: body.mass(),
            });
        }
        let [px, py] = body.position();
        let [vx, vy] = body.velocity();
        if ![px, py, vx, vy].iter().all(|c| c.is_finite()) {
            return Err(InvalidConfiguration::BodyState {
                name: body.name().to_string(),
            });
        }
    }
    Ok(())
}
