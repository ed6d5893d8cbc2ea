//! # Maze Grid
//!
//! A fixed-size 2D array of Blocked/Passage cells, stored row-major.
//!
//! ## Text Format
//!
//! One line per row, one character per column, `#` for Blocked and a space
//! for Passage. Every row is newline-terminated. There is no header; the
//! reader infers the height from the number of rows and the width from the
//! first row. Any character other than `#` reads back as Passage.

use std::fmt;

use tracing::{debug, warn};

/// Character written for a Blocked cell.
pub const BLOCKED_CHAR: char = '#';

/// Character written for a Passage cell.
pub const PASSAGE_CHAR: char = ' ';

/// State of a single maze cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Wall.
    #[default]
    Blocked,
    /// Walkable.
    Passage,
}

impl Cell {
    /// Reads a cell from its text form.
    #[inline]
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        if c == BLOCKED_CHAR {
            Self::Blocked
        } else {
            Self::Passage
        }
    }

    /// Text form of the cell.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Blocked => BLOCKED_CHAR,
            Self::Passage => PASSAGE_CHAR,
        }
    }
}

/// Grid index: `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Coord {
    /// Creates a new coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Cell exactly halfway between two coordinates on the same axis.
    #[inline]
    #[must_use]
    pub const fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }
}

/// Fixed-size grid of cells.
///
/// Dimensions are set at construction and never change.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell Blocked.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Blocked; width * height],
        }
    }

    /// Creates a grid with no cells.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// True when the grid holds no cells.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when `coord` lies inside the grid.
    #[inline]
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    #[inline]
    fn index(&self, coord: Coord) -> usize {
        debug_assert!(self.contains(coord), "{coord:?} outside {}x{}", self.width, self.height);
        coord.y * self.width + coord.x
    }

    /// Cell at `coord`, or `None` outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.contains(coord).then(|| self.cells[self.index(coord)])
    }

    /// True when `coord` is inside the grid and Passage.
    #[inline]
    #[must_use]
    pub fn is_passage(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Cell::Passage)
    }

    /// True when `coord` is inside the grid and Blocked.
    #[inline]
    #[must_use]
    pub fn is_blocked(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Cell::Blocked)
    }

    /// Sets the cell at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` lies outside the grid.
    #[inline]
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        assert!(self.contains(coord), "{coord:?} outside {}x{}", self.width, self.height);
        let index = self.index(coord);
        self.cells[index] = cell;
    }

    /// Number of Passage cells.
    #[must_use]
    pub fn passage_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Passage).count()
    }

    /// All cells with their coordinates in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Coord::new(i % width, i / width), cell))
    }

    /// One row of cells.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not a valid row.
    #[must_use]
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Serialises the grid into the text format.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            out.extend(self.row(y).iter().map(|c| c.to_char()));
            out.push('\n');
        }
        out
    }

    /// Parses the text format.
    ///
    /// Never fails: empty input yields an empty grid, trailing empty rows are
    /// dropped, and rows that disagree with the first row's width are padded
    /// with Blocked cells or truncated.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        let before = lines.len();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        if before - lines.len() > 1 {
            debug!("Dropped {} trailing empty rows", before - lines.len() - 1);
        }

        let Some(first) = lines.first() else {
            return Self::empty();
        };

        let width = first.chars().count();
        let height = lines.len();
        let mut grid = Self::new(width, height);

        for (y, line) in lines.iter().enumerate() {
            let mut found = 0;
            for (x, c) in line.chars().enumerate() {
                found += 1;
                if x < width {
                    grid.set(Coord::new(x, y), Cell::from_char(c));
                }
            }
            if found != width {
                warn!("Maze row {} has {} columns, expected {}", y, found, width);
            }
        }

        grid
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        f.write_str(&self.to_text())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_blocked() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.passage_count(), 0);
        assert!(grid.iter().all(|(_, c)| c == Cell::Blocked));
    }

    #[test]
    fn test_text_layout_is_row_major() {
        let mut grid = Grid::new(3, 2);
        grid.set(Coord::new(1, 0), Cell::Passage);
        grid.set(Coord::new(2, 1), Cell::Passage);
        assert_eq!(grid.to_text(), "# #\n## \n");
    }

    #[test]
    fn test_parse_tolerates_final_newline() {
        let grid = Grid::from_text("###\n# #\n###\n");
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert!(grid.is_passage(Coord::new(1, 1)));
        assert_eq!(grid.passage_count(), 1);
    }

    #[test]
    fn test_parse_without_final_newline() {
        let grid = Grid::from_text("# \n #");
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert!(grid.is_passage(Coord::new(1, 0)));
        assert!(grid.is_passage(Coord::new(0, 1)));
    }

    #[test]
    fn test_parse_empty_is_empty_grid() {
        for text in ["", "\n", "\n\n\n"] {
            let grid = Grid::from_text(text);
            assert!(grid.is_empty(), "{text:?} should parse to an empty grid");
            assert_eq!(grid.height(), 0);
        }
    }

    #[test]
    fn test_parse_any_other_char_is_passage() {
        let grid = Grid::from_text("#.g\n");
        assert_eq!(grid.row(0), &[Cell::Blocked, Cell::Passage, Cell::Passage]);
    }

    #[test]
    fn test_parse_normalises_ragged_rows() {
        let grid = Grid::from_text("# #\n \n#  #\n");
        assert_eq!((grid.width(), grid.height()), (3, 3));
        // Short row padded with Blocked.
        assert_eq!(grid.row(1), &[Cell::Passage, Cell::Blocked, Cell::Blocked]);
        // Long row truncated.
        assert_eq!(grid.row(2), &[Cell::Blocked, Cell::Passage, Cell::Passage]);
    }

    #[test]
    fn test_parse_strips_carriage_returns() {
        let grid = Grid::from_text("# #\r\n###\r\n");
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.to_text(), "# #\n###\n");
    }

    #[test]
    fn test_get_outside_is_none() {
        let grid = Grid::new(2, 2);
        assert_eq!(grid.get(Coord::new(2, 0)), None);
        assert!(!grid.is_blocked(Coord::new(0, 5)));
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(Coord::new(2, 4).midpoint(Coord::new(4, 4)), Coord::new(3, 4));
        assert_eq!(Coord::new(1, 5).midpoint(Coord::new(1, 3)), Coord::new(1, 4));
    }
}
