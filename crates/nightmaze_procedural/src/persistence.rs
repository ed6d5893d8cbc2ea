//! # Maze Persistence
//!
//! Optional on-disk form of a grid, in the text format described in
//! [`crate::grid`]. Generation and layout hand grids over in memory; files
//! exist for debugging and for the `inspect` command.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::MazeResult;
use crate::grid::Grid;

/// Writes `grid` to `path`, replacing any existing file.
///
/// The text is written to a sibling temporary file first and then renamed,
/// so readers never observe a half-written maze.
///
/// # Errors
///
/// Returns [`crate::MazeError::Io`] if the file cannot be written.
pub fn write_maze(path: impl AsRef<Path>, grid: &Grid) -> MazeResult<()> {
    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    {
        let mut file = io::BufWriter::new(fs::File::create(&temp_path)?);
        file.write_all(grid.to_text().as_bytes())?;
        file.flush()?;
    }
    fs::rename(&temp_path, path)?;

    info!(
        "Wrote {}x{} maze to {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(())
}

/// Reads a grid from `path`.
///
/// Content is parsed with [`Grid::from_text`], so an empty file yields an
/// empty grid.
///
/// # Errors
///
/// Returns [`crate::MazeError::Io`] if the file cannot be read, including
/// when it does not exist.
pub fn read_maze(path: impl AsRef<Path>) -> MazeResult<Grid> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let grid = Grid::from_text(&text);
    debug!(
        "Read {}x{} maze from {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}
