//! Game configuration loaded from TOML.

use crate::session::{FirstPlayer, Settings};
use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_engine::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file read when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "noughts.toml";

/// Settings read from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Strength of the computer.
    #[serde(default)]
    difficulty: Difficulty,

    /// Who plays X.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Seed for the computer's random choices; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            difficulty = %config.difficulty,
            first = %config.first_player,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_PATH`] if it exists, else defaults.
    ///
    /// Only an explicitly named file is required to exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces any value for which an override is given.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        difficulty: Option<Difficulty>,
        first_player: Option<FirstPlayer>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(first_player) = first_player {
            self.first_player = first_player;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Returns the session settings described by this config.
    pub fn settings(&self) -> Settings {
        Settings {
            difficulty: self.difficulty,
            first_player: self.first_player,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
