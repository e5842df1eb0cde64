//! Configuration system for the vapor simulation.
//!
//! Supports YAML configuration files with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Particle system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of particles created at startup (never changes afterwards)
    pub num_particles: usize,
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Starting temperature in Celsius
    pub initial_temperature: f64,
    /// RNG seed, random when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Web server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the HTTP/WebSocket server to
    pub bind: String,
    /// Period of the broadcast loop in milliseconds
    pub tick_interval_ms: u64,
    /// Directory holding the static front-end
    pub static_dir: String,
    /// Snapshots buffered per client before it is considered lagging
    pub broadcast_capacity: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Ticks between summary lines in headless runs
    pub stats_interval: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_particles: 100,
            width: 800.0,
            height: 400.0,
            initial_temperature: 25.0,
            seed: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
            tick_interval_ms: 50,
            static_dir: "static".to_string(),
            broadcast_capacity: 16,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            stats_interval: 50,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        let sim = &self.simulation;
        if sim.num_particles == 0 || sim.num_particles > 10_000 {
            return Err("num_particles must be between 1 and 10000".to_string());
        }
        // The vessel spans the left third of the canvas minus a 50px margin and 10px padding
        if !sim.width.is_finite() || sim.width <= 210.0 {
            return Err("width must be greater than 210".to_string());
        }
        if !sim.height.is_finite() || sim.height <= 100.0 {
            return Err("height must be greater than 100".to_string());
        }
        if !(0.0..=150.0).contains(&sim.initial_temperature) {
            return Err("initial_temperature must be between 0 and 150".to_string());
        }
        if self.server.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be > 0".to_string());
        }
        if self.server.broadcast_capacity == 0 {
            return Err("broadcast_capacity must be > 0".to_string());
        }
        if self.logging.stats_interval == 0 {
            return Err("stats_interval must be > 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.simulation.num_particles, loaded.simulation.num_particles);
        assert_eq!(config.server.bind, loaded.server.bind);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "simulation:\n  num_particles: 10\n  width: 600.0\n  height: 300.0\n  initial_temperature: 40.0\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.simulation.num_particles, 10);
        assert_eq!(config.simulation.seed, None);
        assert_eq!(config.server.tick_interval_ms, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        config.simulation.width = 100.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.simulation.initial_temperature = 200.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.server.tick_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_canvas_rejected() {
        let yaml = "simulation:\n  num_particles: 10\n  width: .inf\n  height: 300.0\n  initial_temperature: 40.0\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.simulation.width.is_infinite());
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.simulation.height = f64::INFINITY;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.simulation.width = f64::NAN;
        assert!(config.validate().is_err());
    }
}
