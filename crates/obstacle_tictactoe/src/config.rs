//! Board layout configuration.

use crate::board::{Board, STANDARD_OBSTACLES, STANDARD_SIZE};
use crate::controller::{DEFAULT_WIN_LENGTH, GameController};
use crate::types::Coord;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Dimensions, obstacles and win length of a game.
///
/// Every field is optional in TOML and falls back to the standard 5x5
/// layout:
///
/// ```toml
/// rows = 5
/// cols = 5
/// win_length = 5
/// obstacles = [{ row = 1, col = 1 }, { row = 3, col = 3 }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board height.
    #[serde(default = "default_size")]
    rows: usize,

    /// Board width.
    #[serde(default = "default_size")]
    cols: usize,

    /// Marks in a row needed to win.
    #[serde(default = "default_win_length")]
    win_length: usize,

    /// Fixed obstacle cells.
    #[serde(default = "default_obstacles")]
    obstacles: Vec<Coord>,
}

fn default_size() -> usize {
    STANDARD_SIZE
}

fn default_obstacles() -> Vec<Coord> {
    STANDARD_OBSTACLES.to_vec()
}

fn default_win_length() -> usize {
    DEFAULT_WIN_LENGTH.get()
}

impl GameConfig {
    /// Creates a configuration from explicit values.
    pub fn new(rows: usize, cols: usize, obstacles: Vec<Coord>, win_length: usize) -> Self {
        Self {
            rows,
            cols,
            obstacles,
            win_length,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            rows = config.rows,
            cols = config.cols,
            obstacles = config.obstacles.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Builds an empty board with the configured layout.
    pub fn build_board(&self) -> Result<Board, ConfigError> {
        Board::new(self.rows, self.cols, self.obstacles.iter().copied())
            .map_err(|e| ConfigError::new(format!("Invalid board layout: {}", e)))
    }

    /// Builds a controller bound to a fresh board.
    #[instrument(skip(self))]
    pub fn build_controller(&self) -> Result<GameController, ConfigError> {
        let win_length = NonZeroUsize::new(self.win_length)
            .ok_or_else(|| ConfigError::new("win_length must be at least 1".to_string()))?;
        Ok(GameController::with_win_length(self.build_board()?, win_length))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            default_size(),
            default_size(),
            default_obstacles(),
            default_win_length(),
        )
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
