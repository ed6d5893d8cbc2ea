//! # Maze Layout
//!
//! Turns a grid into world-space placement data.
//!
//! ## Coordinate Mapping
//!
//! Column `c` and row `r` map to world `X = c * column_spacing` and
//! `Z = -(r * row_spacing)`: the maze extends along +X and into the screen
//! along -Z. Y comes from the per-object elevation in [`LayoutConfig`].
//!
//! Scattered objects (lights, pickups) draw from a caller-supplied random
//! source; the `seeded_*` helpers pull a dedicated stream from a
//! [`MazeSeed`] so a seed reproduces the whole layout.

use std::io;
use std::path::Path;

use nightmaze_shared::Vec3;
use rand::Rng;
use tracing::{debug, warn};

use crate::config::LayoutConfig;
use crate::error::{MazeError, MazeResult};
use crate::grid::{Cell, Coord, Grid};
use crate::persistence::read_maze;
use crate::seed::{MazeSeed, STREAM_LIGHTS, STREAM_PICKUPS};

/// A grid plus the world-unit mapping used to place objects on it.
#[derive(Clone, Debug, PartialEq)]
pub struct MazeLayout {
    grid: Grid,
    config: LayoutConfig,
}

impl MazeLayout {
    /// Wraps an in-memory grid.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidConfig`] if `config` fails
    /// [`LayoutConfig::validate`].
    pub fn new(grid: Grid, config: LayoutConfig) -> MazeResult<Self> {
        config.validate()?;
        Ok(Self { grid, config })
    }

    /// Parses the text format. Malformed text still yields a layout.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidConfig`] for an invalid `config`.
    pub fn from_text(text: &str, config: LayoutConfig) -> MazeResult<Self> {
        Self::new(Grid::from_text(text), config)
    }

    /// Loads a maze file.
    ///
    /// A missing file loads as an empty grid, with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidConfig`] for an invalid `config`, checked
    /// before the file is touched, and [`MazeError::Io`] for read failures
    /// other than the file not existing.
    pub fn load(path: impl AsRef<Path>, config: LayoutConfig) -> MazeResult<Self> {
        config.validate()?;
        let path = path.as_ref();
        match read_maze(path) {
            Ok(grid) => Self::new(grid, config),
            Err(MazeError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                warn!("Maze file {} not found, using an empty maze", path.display());
                Self::new(Grid::empty(), config)
            }
            Err(err) => Err(err),
        }
    }

    /// The underlying grid.
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The world-unit mapping in use.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// World X/Z of a grid cell, at elevation `y`.
    #[inline]
    #[must_use]
    pub fn cell_to_world(&self, coord: Coord, y: f32) -> Vec3 {
        Vec3::new(
            coord.x as f32 * self.config.column_spacing,
            y,
            -(coord.y as f32 * self.config.row_spacing),
        )
    }

    /// One position per Blocked cell, in row-major order.
    #[must_use]
    pub fn building_positions(&self) -> Vec<Vec3> {
        self.grid
            .iter()
            .filter(|&(_, cell)| cell == Cell::Blocked)
            .map(|(coord, _)| self.cell_to_world(coord, self.config.building_elevation))
            .collect()
    }

    /// `count` light positions over random cells, jittered upward from the
    /// base height. An empty grid has nowhere to put them.
    #[must_use]
    pub fn light_positions<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Vec3> {
        if self.grid.is_empty() {
            return Vec::new();
        }

        let (width, height) = (self.grid.width(), self.grid.height());
        let base = self.config.light_base_height;
        let jitter = self.config.light_jitter;

        (0..count)
            .map(|_| {
                let coord = Coord::new(rng.gen_range(0..width), rng.gen_range(0..height));
                let lift = if jitter > 0.0 {
                    rng.gen_range(0.0..jitter)
                } else {
                    0.0
                };
                self.cell_to_world(coord, base + lift)
            })
            .collect()
    }

    /// Pickup positions: each Passage cell independently holds one with
    /// probability `pickup_chance`, nudged by whole-unit offsets on X and Z.
    ///
    /// The offset sign is drawn before the chance roll, for every Passage
    /// cell, and applies to both axes.
    #[must_use]
    pub fn pickup_positions<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Vec3> {
        let config = &self.config;
        let mut positions = Vec::new();

        for (coord, cell) in self.grid.iter() {
            if cell != Cell::Passage {
                continue;
            }

            let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            if !rng.gen_bool(config.pickup_chance) {
                continue;
            }

            let dx = whole_offset(rng, config.pickup_offset_x) * sign;
            let dz = whole_offset(rng, config.pickup_offset_z) * sign;
            let base = self.cell_to_world(coord, config.pickup_elevation);
            positions.push(Vec3::new(base.x + dx, base.y, base.z - dz));
        }

        debug!(
            "Scattered {} pickups over {} passages",
            positions.len(),
            self.grid.passage_count()
        );
        positions
    }

    /// First Passage cell at or beyond `spawn_offset` on both axes, scanning
    /// rows top to bottom, placed at the spawn elevation.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::NoSpawnFound`] if no such cell exists.
    pub fn spawn_location(&self) -> MazeResult<Vec3> {
        let offset = self.config.spawn_offset;

        self.grid
            .iter()
            .find(|&(coord, cell)| cell == Cell::Passage && coord.x >= offset && coord.y >= offset)
            .map(|(coord, _)| self.cell_to_world(coord, self.config.spawn_elevation))
            .ok_or_else(|| {
                warn!(
                    "No spawn cell in {}x{} maze at offset {}",
                    self.grid.width(),
                    self.grid.height(),
                    offset
                );
                MazeError::NoSpawnFound { offset }
            })
    }

    /// Column count scaled to world extent.
    #[inline]
    #[must_use]
    pub fn maze_width(&self) -> f32 {
        self.grid.width() as f32 * self.config.extent_scale
    }

    /// Row count scaled to world extent.
    #[inline]
    #[must_use]
    pub fn maze_height(&self) -> f32 {
        self.grid.height() as f32 * self.config.extent_scale
    }

    /// [`Self::light_positions`] for the configured count, drawn from the
    /// seed's light stream.
    #[must_use]
    pub fn seeded_light_positions(&self, seed: MazeSeed) -> Vec<Vec3> {
        self.light_positions(self.config.light_count, &mut seed.rng(STREAM_LIGHTS))
    }

    /// [`Self::pickup_positions`] drawn from the seed's pickup stream.
    #[must_use]
    pub fn seeded_pickup_positions(&self, seed: MazeSeed) -> Vec<Vec3> {
        self.pickup_positions(&mut seed.rng(STREAM_PICKUPS))
    }
}

/// Uniform whole number in `0..bound`, or zero for an empty range.
#[inline]
fn whole_offset<R: Rng + ?Sized>(rng: &mut R, bound: u32) -> f32 {
    if bound == 0 {
        0.0
    } else {
        rng.gen_range(0..bound) as f32
    }
}
