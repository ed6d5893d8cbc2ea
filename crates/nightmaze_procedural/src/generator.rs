//! # Maze Generator
//!
//! Randomized frontier growth, a Prim's variant on the square lattice with
//! step size 2.
//!
//! ## Algorithm
//!
//! 1. Start with every cell Blocked.
//! 2. Carve a uniformly random start cell and queue its frontier: the
//!    Blocked cells two steps away along one axis whose coordinate on that
//!    axis stays off the outer ring.
//! 3. While the frontier is non-empty, remove a uniformly random frontier
//!    cell, pick a uniformly random Passage cell two steps away from it, and
//!    carve both the frontier cell and the wall cell halfway between them.
//!    Queue the frontier of the newly carved cell.
//!
//! Carved lattice cells share the start cell's parity on both axes, so the
//! walls between them sit on the other parity and every corridor is exactly
//! one cell wide. Each cell enters the frontier at most once, so nothing is
//! carved twice: the result is a spanning tree over the reachable lattice
//! cells (no cycles, fully connected).

use rand::Rng;
use tracing::debug;

use crate::error::{MazeError, MazeResult};
use crate::grid::{Cell, Coord, Grid};
use crate::seed::{MazeSeed, STREAM_CARVE};

/// A generated maze plus the facts needed to check it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMaze {
    /// The carved grid.
    pub grid: Grid,
    /// First carved cell.
    pub start: Coord,
    /// Number of frontier cells removed and carved.
    pub carve_steps: usize,
}

impl GeneratedMaze {
    /// Text form of the grid.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.grid.to_text()
    }
}

/// Seeded maze generator.
///
/// # Example
///
/// ```rust,ignore
/// let maze = MazeGenerator::new(MazeSeed::new(42)).generate(51, 51)?;
/// assert!(maze.grid.is_passage(maze.start));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MazeGenerator {
    seed: MazeSeed,
}

impl MazeGenerator {
    /// Creates a generator for the given seed.
    #[must_use]
    pub const fn new(seed: MazeSeed) -> Self {
        Self { seed }
    }

    /// The seed this generator carves with.
    #[must_use]
    pub const fn seed(&self) -> MazeSeed {
        self.seed
    }

    /// Generates a `width` x `height` maze.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] if either dimension is zero.
    pub fn generate(&self, width: usize, height: usize) -> MazeResult<GeneratedMaze> {
        debug!("Generating {}x{} maze with seed {:#x}", width, height, self.seed.value());
        generate_with(width, height, &mut self.seed.rng(STREAM_CARVE))
    }
}

/// Generates a maze drawing every random decision from `rng`.
///
/// Grids smaller than 3 on an axis cannot grow along that axis; a 1x1 or
/// 2x2 request yields a single carved cell.
///
/// # Errors
///
/// Returns [`MazeError::InvalidDimensions`] if either dimension is zero, and
/// [`MazeError::EmptyFrontierNeighbours`] if the frontier invariant breaks.
pub fn generate_with<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> MazeResult<GeneratedMaze> {
    if width == 0 || height == 0 {
        return Err(MazeError::InvalidDimensions { width, height });
    }

    let mut grid = Grid::new(width, height);
    let mut queued = vec![false; width * height];
    let mut frontier: Vec<Coord> = Vec::new();

    let start = Coord::new(rng.gen_range(0..width), rng.gen_range(0..height));
    grid.set(start, Cell::Passage);
    queue_frontier(&grid, start, &mut frontier, &mut queued);

    let mut carve_steps = 0;
    let mut neighbours = Vec::with_capacity(4);

    while !frontier.is_empty() {
        let cell = frontier.swap_remove(rng.gen_range(0..frontier.len()));
        debug_assert!(grid.is_blocked(cell), "frontier cell {cell:?} already carved");

        passage_neighbours(&grid, cell, &mut neighbours);
        if neighbours.is_empty() {
            return Err(MazeError::EmptyFrontierNeighbours { x: cell.x, y: cell.y });
        }
        let neighbour = neighbours[rng.gen_range(0..neighbours.len())];

        grid.set(cell, Cell::Passage);
        grid.set(cell.midpoint(neighbour), Cell::Passage);
        carve_steps += 1;

        queue_frontier(&grid, cell, &mut frontier, &mut queued);
    }

    debug!(
        "Carved {} passages over {} steps from ({}, {})",
        grid.passage_count(),
        carve_steps,
        start.x,
        start.y
    );

    Ok(GeneratedMaze {
        grid,
        start,
        carve_steps,
    })
}

/// Queues the Blocked cells two steps from `from` that are not queued yet.
///
/// The moved coordinate must land in `1..=len - 2`, so every frontier cell
/// keeps a distance-2 neighbour on the side it was reached from.
fn queue_frontier(grid: &Grid, from: Coord, frontier: &mut Vec<Coord>, queued: &mut [bool]) {
    let (x, y) = (from.x, from.y);
    let (w, h) = (grid.width(), grid.height());

    let candidates = [
        (y + 3 < h).then(|| Coord::new(x, y + 2)),
        (y >= 3).then(|| Coord::new(x, y - 2)),
        (x + 3 < w).then(|| Coord::new(x + 2, y)),
        (x >= 3).then(|| Coord::new(x - 2, y)),
    ];

    for coord in candidates.into_iter().flatten() {
        let slot = coord.y * w + coord.x;
        if grid.is_blocked(coord) && !queued[slot] {
            queued[slot] = true;
            frontier.push(coord);
        }
    }
}

/// Collects the Passage cells two steps from `from`.
fn passage_neighbours(grid: &Grid, from: Coord, out: &mut Vec<Coord>) {
    let (x, y) = (from.x, from.y);
    out.clear();

    let candidates = [
        Some(Coord::new(x, y + 2)),
        y.checked_sub(2).map(|ny| Coord::new(x, ny)),
        Some(Coord::new(x + 2, y)),
        x.checked_sub(2).map(|nx| Coord::new(nx, y)),
    ];

    out.extend(candidates.into_iter().flatten().filter(|&c| grid.is_passage(c)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimension_rejected() {
        let gen = MazeGenerator::new(MazeSeed::new(1));
        assert!(matches!(
            gen.generate(0, 5),
            Err(MazeError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(matches!(
            gen.generate(5, 0),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_tiny_grids_carve_single_cell() {
        for (w, h) in [(1, 1), (2, 2), (1, 2), (2, 1)] {
            let maze = MazeGenerator::new(MazeSeed::new(9)).generate(w, h).unwrap();
            assert_eq!(maze.grid.passage_count(), 1, "{w}x{h}");
            assert_eq!(maze.carve_steps, 0);
            assert!(maze.grid.is_passage(maze.start));
        }
    }

    #[test]
    fn test_frontier_stays_off_outer_ring() {
        let grid = Grid::new(7, 7);
        let mut frontier = Vec::new();
        let mut queued = vec![false; 49];
        queue_frontier(&grid, Coord::new(1, 1), &mut frontier, &mut queued);
        frontier.sort();
        assert_eq!(frontier, vec![Coord::new(1, 3), Coord::new(3, 1)]);

        // From a corner, only inward moves qualify.
        frontier.clear();
        queue_frontier(&grid, Coord::new(0, 6), &mut frontier, &mut queued);
        assert_eq!(frontier, vec![Coord::new(0, 4), Coord::new(2, 6)]);
    }

    #[test]
    fn test_frontier_is_queued_once() {
        let grid = Grid::new(7, 7);
        let mut frontier = Vec::new();
        let mut queued = vec![false; 49];
        queue_frontier(&grid, Coord::new(1, 1), &mut frontier, &mut queued);
        queue_frontier(&grid, Coord::new(5, 1), &mut frontier, &mut queued);
        let shared = frontier.iter().filter(|&&c| c == Coord::new(3, 1)).count();
        assert_eq!(shared, 1);
    }

    #[test]
    fn test_neighbours_reach_the_edge() {
        let mut grid = Grid::new(5, 5);
        grid.set(Coord::new(0, 2), Cell::Passage);
        grid.set(Coord::new(2, 4), Cell::Passage);
        let mut out = Vec::new();
        passage_neighbours(&grid, Coord::new(2, 2), &mut out);
        out.sort();
        assert_eq!(out, vec![Coord::new(0, 2), Coord::new(2, 4)]);
    }

    #[test]
    fn test_each_step_carves_two_cells() {
        let maze = MazeGenerator::new(MazeSeed::new(77)).generate(21, 15).unwrap();
        assert_eq!(maze.grid.passage_count(), 1 + 2 * maze.carve_steps);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = MazeGenerator::new(MazeSeed::new(5)).generate(31, 31).unwrap();
        let b = MazeGenerator::new(MazeSeed::new(5)).generate(31, 31).unwrap();
        assert_eq!(a, b);
    }
}
