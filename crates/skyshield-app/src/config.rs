//! Driver configuration, read from an optional JSON file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use skyshield_core::enums::Difficulty;
use skyshield_core::types::Playfield;
use skyshield_sim::SimConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("playfield must be positive, got {width}x{height}")]
    Playfield { width: f64, height: f64 },
    #[error("realtime: false needs the autopilot or max_ticks; stdin play would race ahead")]
    UnpacedInteractive,
}

/// Everything the headless driver needs to run a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// RNG seed handed to the engine.
    pub seed: u64,
    pub playfield: Playfield,
    /// Difficulty used when the autopilot starts a session.
    pub difficulty: Difficulty,
    /// Let the built-in autopilot play instead of reading commands from stdin.
    pub autopilot: bool,
    /// Sleep to the 60 Hz frame boundary. Off runs as fast as possible and
    /// is only accepted with the autopilot or a `max_ticks` bound.
    pub realtime: bool,
    /// Stop after this many loop iterations.
    pub max_ticks: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            playfield: Playfield::default(),
            difficulty: Difficulty::default(),
            autopilot: false,
            realtime: true,
            max_ticks: None,
        }
    }
}

impl AppConfig {
    /// Load from `path`. Missing keys fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let Playfield { width, height } = self.playfield;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::Playfield { width, height });
        }
        if !self.realtime && !self.autopilot && self.max_ticks.is_none() {
            return Err(ConfigError::UnpacedInteractive);
        }
        Ok(())
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            playfield: self.playfield,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "seed": 7, "autopilot": true }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert!(config.autopilot);
        assert!(config.realtime);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.playfield, Playfield::default());
    }

    #[test]
    fn rejects_empty_playfield() {
        let err = AppConfig::from_json(r#"{ "playfield": { "width": 0.0, "height": 720.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Playfield { .. }));
    }

    #[test]
    fn unpaced_run_needs_a_driver() {
        let err = AppConfig::from_json(r#"{ "realtime": false }"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnpacedInteractive));

        let config = AppConfig::from_json(r#"{ "realtime": false, "autopilot": true }"#).unwrap();
        assert!(!config.realtime);
        let config = AppConfig::from_json(r#"{ "realtime": false, "max_ticks": 600 }"#).unwrap();
        assert_eq!(config.max_ticks, Some(600));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = AppConfig::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = AppConfig::load(Path::new("/nonexistent/skyshield.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/skyshield.json"));
    }
}
