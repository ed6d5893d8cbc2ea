//! # NIGHTMAZE Procedural Generation
//!
//! Deterministic maze generation and world layout.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces the same maze
//! 2. **In-memory**: Generation hands a `Grid` straight to the layout; the
//!    text file is an optional artifact
//! 3. **Explicit failures**: Bad dimensions and missing spawn cells surface
//!    as `MazeError`, never as panics
//!
//! ## Core Components
//!
//! - `Grid`: Blocked/Passage cells and the text format
//! - `MazeGenerator`: Randomized frontier growth
//! - `MazeLayout`: World positions for buildings, lights, pickups and spawn
//! - `MazeSeed`: Seed plus independent sub-streams
//!
//! ## Example
//!
//! ```rust,ignore
//! use nightmaze_procedural::{LayoutConfig, MazeGenerator, MazeLayout, MazeSeed};
//!
//! let seed = MazeSeed::new(12345);
//! let maze = MazeGenerator::new(seed).generate(51, 51)?;
//!
//! let layout = MazeLayout::new(maze.grid, LayoutConfig::default())?;
//! let spawn = layout.spawn_location()?;
//! let pickups = layout.seeded_pickup_positions(seed);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]

pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod layout;
pub mod persistence;
pub mod seed;

pub use config::LayoutConfig;
pub use error::{MazeError, MazeResult};
pub use generator::{generate_with, GeneratedMaze, MazeGenerator};
pub use grid::{Cell, Coord, Grid};
pub use layout::MazeLayout;
pub use persistence::{read_maze, write_maze};
pub use seed::MazeSeed;
