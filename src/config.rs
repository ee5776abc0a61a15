//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Fewest players a counting-out game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Default upper bound on the number of players.
pub const DEFAULT_MAX_PLAYERS: usize = 11;

/// Inclusive range of player counts a game accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Smallest accepted player count.
    pub min: usize,
    /// Largest accepted player count.
    pub max: usize,
}

impl Bounds {
    /// Returns true if `players` lies within the bounds.
    pub fn contains(&self, players: usize) -> bool {
        (self.min..=self.max).contains(&players)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: MIN_PLAYERS,
            max: DEFAULT_MAX_PLAYERS,
        }
    }
}

/// Settings for the counting-out game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Smallest player count accepted at setup.
    #[serde(default = "default_min_players")]
    min_players: usize,

    /// Largest player count accepted at setup.
    #[serde(default = "default_max_players")]
    max_players: usize,

    /// Player count used when none is given on the command line.
    #[serde(default)]
    #[setters(strip_option)]
    default_players: Option<usize>,

    /// Step count used when none is given on the command line.
    #[serde(default)]
    #[setters(strip_option)]
    default_step: Option<usize>,

    /// Prefix printed before each seat number.
    #[serde(default = "default_label")]
    #[setters(into)]
    label: String,
}

fn default_min_players() -> usize {
    MIN_PLAYERS
}

fn default_max_players() -> usize {
    DEFAULT_MAX_PLAYERS
}

fn default_label() -> String {
    "Player".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: default_min_players(),
            max_players: default_max_players(),
            default_players: None,
            default_step: None,
            label: default_label(),
        }
    }
}

impl GameConfig {
    /// Parses and validates configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            min_players = config.min_players,
            max_players = config.max_players,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads configuration from `path`, or the defaults if the file is absent.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks that the player bounds describe a playable game.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players < MIN_PLAYERS {
            return Err(ConfigError::new(format!(
                "min_players must be at least {}, got {}",
                MIN_PLAYERS, self.min_players
            )));
        }
        if self.max_players < self.min_players {
            return Err(ConfigError::new(format!(
                "max_players ({}) is below min_players ({})",
                self.max_players, self.min_players
            )));
        }
        Ok(())
    }

    /// The accepted player-count range.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min: self.min_players,
            max: self.max_players,
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
