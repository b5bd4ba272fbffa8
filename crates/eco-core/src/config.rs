//! Configuration types for the simulation.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// River construction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiverConfig {
    /// Number of cells in the river
    pub size: usize,
    /// Probability that a cell starts occupied (0.0 to 1.0)
    pub fill_probability: f64,
    /// Random seed for reproducibility
    pub seed: u64,
}

impl Default for RiverConfig {
    fn default() -> Self {
        Self {
            size: 20,
            fill_probability: 0.6,
            seed: 0,
        }
    }
}

impl RiverConfig {
    /// Check the construction parameters.
    pub fn validate(&self) -> Result<()> {
        validate_params(self.size, self.fill_probability)
    }
}

/// Range check shared by every river constructor
pub fn validate_params(size: usize, fill_probability: f64) -> Result<()> {
    if size == 0 {
        return Err(Error::InvalidArgument(
            "river size must be positive".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&fill_probability) {
        return Err(Error::InvalidArgument(format!(
            "fill probability must be within [0, 1], got {}",
            fill_probability
        )));
    }
    Ok(())
}

/// Driver loop parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of steps to run
    pub steps: u64,
    /// Pause between rendered frames (milliseconds)
    pub delay_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps: 10,
            delay_ms: 300,
        }
    }
}

/// Full simulation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub river: RiverConfig,
    pub run: RunConfig,
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file; missing fields keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let river = RiverConfig::default();
        assert_eq!(river.size, 20);
        assert_eq!(river.fill_probability, 0.6);
        assert!(river.validate().is_ok());

        let run = RunConfig::default();
        assert_eq!(run.delay_ms, 300);
    }

    #[test]
    fn test_validation_rejects_bad_params() {
        assert!(matches!(
            validate_params(0, 0.5),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            validate_params(5, 1.5),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            validate_params(5, -0.1),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            validate_params(5, f64::NAN),
            Err(Error::InvalidArgument(_))
        ));
        assert!(validate_params(1, 0.0).is_ok());
        assert!(validate_params(1, 1.0).is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimulationConfig::from_json_str(r#"{"river": {"size": 64}}"#).unwrap();
        assert_eq!(config.river.size, 64);
        assert_eq!(config.river.fill_probability, 0.6);
        assert_eq!(config.run, RunConfig::default());
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = SimulationConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SimulationConfig::from_json_file("/nonexistent/eco-river.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
