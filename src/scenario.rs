//! Scenario loading and conversion into simulator inputs.

use std::path::Path;

use thiserror::Error;

use gravity_config::{ConfigError, ScenarioConfig};
use gravity_sim::{Body, BodySet, SimulationConfig, SimulationError, TrajectorySet};

/// Errors from loading or running a scenario end to end.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("scenario loading failed: {0}")]
    Config(#[from] ConfigError),
    #[error("simulation failed: {0}")]
    Simulation(#[from] SimulationError),
}

/// A completed run together with the scenario that produced it.
#[derive(Debug)]
pub struct RunArtifacts {
    pub scenario: ScenarioConfig,
    pub trajectories: TrajectorySet,
}

/// Convert manifest records into simulator inputs. Validation happens in
/// `Simulator::new`, not here.
pub fn build_inputs(scenario: &ScenarioConfig) -> (BodySet, SimulationConfig) {
    let bodies = scenario
        .bodies
        .iter()
        .map(|body| Body::new(body.name.clone(), body.mass, body.position, body.velocity))
        .collect();
    let config = SimulationConfig {
        time_step: scenario.time_step,
        duration: scenario.duration,
        gravitational_constant: scenario.gravitational_constant,
        softening_length: scenario.softening_length,
    };
    (bodies, config)
}

/// Run an already-loaded scenario to completion.
pub fn run_scenario(scenario: ScenarioConfig) -> Result<RunArtifacts, SimulationError> {
    let (bodies, config) = build_inputs(&scenario);
    let trajectories = gravity_sim::run(bodies, config)?;
    Ok(RunArtifacts {
        scenario,
        trajectories,
    })
}

/// Load a manifest and run it to completion.
pub fn run_scenario_file<P: AsRef<Path>>(path: P) -> Result<RunArtifacts, RunError> {
    let scenario = gravity_config::load_scenario(path)?;
    Ok(run_scenario(scenario)?)
}
