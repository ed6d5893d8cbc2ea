//! # Maze Error Types
//!
//! Structural failures of generation, loading and layout derivation.

use thiserror::Error;

/// Errors that can occur while producing or interpreting a maze.
#[derive(Error, Debug)]
pub enum MazeError {
    /// Requested grid has a zero dimension.
    #[error("invalid maze dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions {
        /// Requested width (columns).
        width: usize,
        /// Requested height (rows).
        height: usize,
    },

    /// No passage cell exists at or beyond the spawn search offset.
    #[error("no spawn found: no passage cell at row and column >= {offset}")]
    NoSpawnFound {
        /// First row and column considered.
        offset: usize,
    },

    /// A frontier cell had no carved neighbour at distance two.
    ///
    /// The frontier construction makes this impossible; seeing it means the
    /// grid was mutated behind the generator's back.
    #[error("frontier cell ({x}, {y}) has no passage neighbour")]
    EmptyFrontierNeighbours {
        /// Column of the orphaned frontier cell.
        x: usize,
        /// Row of the orphaned frontier cell.
        y: usize,
    },

    /// Layout configuration rejected.
    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),

    /// Reading or writing a maze file failed.
    #[error("maze file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for maze operations.
pub type MazeResult<T> = Result<T, MazeError>;
