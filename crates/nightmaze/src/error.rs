//! # Game Error Types

use std::path::PathBuf;

use nightmaze_procedural::MazeError;
use thiserror::Error;

/// Errors raised while configuring or building a simulation.
///
/// Stepping a built simulation never fails.
#[derive(Error, Debug)]
pub enum GameError {
    /// Maze generation, loading or layout failed.
    #[error(transparent)]
    Maze(#[from] MazeError),

    /// A configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        /// File that was being read.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file is not valid TOML for [`crate::GameConfig`].
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration value is out of range.
    #[error("invalid simulation configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for game setup.
pub type GameResult<T> = Result<T, GameError>;
