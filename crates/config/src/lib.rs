//! Scenario manifests for the gravity simulator.
//!
//! A manifest names a scenario, its run parameters, and the initial body
//! set. Parsing performs no physics validation; the simulator owns that, so
//! a manifest with, say, a zero mass loads fine and is rejected before the
//! run starts.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use gravity_core::constants;

/// One point mass as declared in a scenario manifest.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64,
    pub position: [f64; 2],
    pub velocity: [f64; 2],
}

/// A complete simulation scenario: run parameters plus the initial bodies.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub name: String,
    #[serde(default = "default_time_step")]
    pub time_step: f64,
    #[serde(default = "default_duration")]
    pub duration: f64,
    #[serde(default = "default_gravitational_constant")]
    pub gravitational_constant: f64,
    #[serde(default)]
    pub softening_length: f64,
    pub bodies: Vec<BodyConfig>,
}

fn default_time_step() -> f64 {
    constants::DEFAULT_TIME_STEP
}

fn default_duration() -> f64 {
    constants::DEFAULT_DURATION
}

fn default_gravitational_constant() -> f64 {
    constants::GRAVITATIONAL_CONSTANT
}

/// Errors that can occur while loading scenario manifests.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load a single scenario manifest, TOML or YAML by file extension.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let path = path.as_ref();
    if has_extension(path, "toml") {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// Load every manifest in a directory, sorted by path.
pub fn load_scenarios<P: AsRef<Path>>(dir: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir.as_ref())?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            has_extension(path, "toml") || has_extension(path, "yaml") || has_extension(path, "yml")
        })
        .collect();
    entries.sort();

    let mut scenarios = Vec::with_capacity(entries.len());
    for path in entries {
        scenarios.push(load_scenario(&path)?);
    }
    Ok(scenarios)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().map(|e| e == ext).unwrap_or(false)
}
