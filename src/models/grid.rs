//! Grid Model
//!
//! The immutable maze matrix plus cached start and exit coordinates.
//! Every structural rule is checked eagerly at construction, so a `Grid`
//! value is valid for its whole lifetime and is never mutated afterwards.
//! Only the session's player coordinate changes during play.

use super::cell::Cell;
use super::position::Position;

/// Smallest accepted maze width or height
pub const MIN_DIMENSION: usize = 5;

/// Largest accepted maze width or height
pub const MAX_DIMENSION: usize = 100;

/// Structural validation errors raised while building a [`Grid`]
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid maze width: {0} (must be between 5 and 100)")]
    InvalidWidth(usize),

    #[error("invalid maze height: {0} (must be between 5 and 100)")]
    InvalidHeight(usize),

    #[error("row {row} is {actual} cells wide, expected {expected}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("maze has {actual} rows, expected {expected}")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error("invalid character '{ch}' at row {row}, column {col}")]
    InvalidCharacter { row: usize, col: usize, ch: char },

    #[error("maze has no start cell")]
    MissingStart,

    #[error("maze has more than one start cell")]
    DuplicateStart,

    #[error("maze has no exit cell")]
    MissingExit,

    #[error("maze has more than one exit cell")]
    DuplicateExit,
}

/// The immutable maze matrix
///
/// Cells are stored in a single row-major vector indexed by
/// `row * width + col`; the grid is capped at 100x100 so the backing
/// storage never exceeds 10,000 cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    start: Position,
    exit: Position,
}

impl Grid {
    /// Build a grid from pre-split text rows
    ///
    /// `expected_width` and `expected_height` come from the caller (the
    /// command line, for the shipped binary) and every row must agree
    /// with them. Start/exit discovery, duplicate detection and character
    /// validation all happen here, in this one place; callers never
    /// re-derive any of it.
    pub fn from_rows<S: AsRef<str>>(
        rows: &[S],
        expected_width: usize,
        expected_height: usize,
    ) -> Result<Self, GridError> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&expected_width) {
            return Err(GridError::InvalidWidth(expected_width));
        }
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&expected_height) {
            return Err(GridError::InvalidHeight(expected_height));
        }
        if rows.len() != expected_height {
            return Err(GridError::RowCountMismatch {
                expected: expected_height,
                actual: rows.len(),
            });
        }

        let mut cells = Vec::with_capacity(expected_width * expected_height);
        let mut start = None;
        let mut exit = None;

        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let row_len = row.chars().count();
            if row_len != expected_width {
                return Err(GridError::DimensionMismatch {
                    row: row_idx,
                    expected: expected_width,
                    actual: row_len,
                });
            }

            for (col_idx, ch) in row.chars().enumerate() {
                let cell = Cell::from_symbol(ch).ok_or(GridError::InvalidCharacter {
                    row: row_idx,
                    col: col_idx,
                    ch,
                })?;

                let here = Position::new(row_idx as i32, col_idx as i32);
                match cell {
                    Cell::Start => {
                        if start.replace(here).is_some() {
                            return Err(GridError::DuplicateStart);
                        }
                    }
                    Cell::Exit => {
                        if exit.replace(here).is_some() {
                            return Err(GridError::DuplicateExit);
                        }
                    }
                    _ => {}
                }
                cells.push(cell);
            }
        }

        let start = start.ok_or(GridError::MissingStart)?;
        let exit = exit.ok_or(GridError::MissingExit)?;

        debug!(
            width = expected_width,
            height = expected_height,
            ?start,
            ?exit,
            "maze grid validated"
        );

        Ok(Self {
            cells,
            width: expected_width,
            height: expected_height,
            start,
            exit,
        })
    }

    /// Build a grid from a complete maze text, one row per line
    pub fn from_text(
        text: &str,
        expected_width: usize,
        expected_height: usize,
    ) -> Result<Self, GridError> {
        let rows: Vec<&str> = text.lines().collect();
        Self::from_rows(&rows, expected_width, expected_height)
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Coordinates of the unique start cell
    pub fn start(&self) -> Position {
        self.start
    }

    /// Coordinates of the unique exit cell
    pub fn exit(&self) -> Position {
        self.exit
    }

    /// Whether a position lies inside the grid rectangle
    pub fn is_in_bounds(&self, position: Position) -> bool {
        position.row >= 0
            && (position.row as usize) < self.height
            && position.col >= 0
            && (position.col as usize) < self.width
    }

    /// The cell at an in-bounds position
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds. Callers are expected to
    /// route movement through the move evaluator, which treats the
    /// boundary as a wall and never asks for cells outside the grid;
    /// reaching the panic indicates a bug in the caller, not bad input.
    pub fn cell_at(&self, position: Position) -> Cell {
        assert!(
            self.is_in_bounds(position),
            "cell_at called with out-of-bounds position {:?}",
            position
        );
        self.cells[position.row as usize * self.width + position.col as usize]
    }
}
