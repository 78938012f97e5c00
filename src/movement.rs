//! Move legality evaluation
//!
//! Computes candidate squares from a position and a direction, and decides
//! whether a square can be stepped on. Both gameplay and pathfinding route
//! every step through this module so they agree on what counts as legal.

use crate::models::{Direction, Grid, Position};

/// The square one step away in the given direction
///
/// Pure offset arithmetic; the result may lie outside the grid. Legality
/// is [`is_wall`]'s job.
pub fn candidate(from: Position, direction: Direction) -> Position {
    let (d_row, d_col) = direction.delta();
    Position::new(from.row + d_row, from.col + d_col)
}

/// Whether a square blocks movement
///
/// Out-of-bounds coordinates count as walls: the maze boundary behaves
/// exactly like a wall cell, so edge clipping and wall collision collapse
/// into one check.
pub fn is_wall(grid: &Grid, position: Position) -> bool {
    if !grid.is_in_bounds(position) {
        return true;
    }
    grid.cell_at(position).is_wall()
}

/// Attempt a single step
///
/// Returns the candidate square if it is open, or `None` when a wall or
/// the boundary blocks it. A rejected move is an ordinary outcome of
/// play, not an error.
pub fn try_move(grid: &Grid, from: Position, direction: Direction) -> Option<Position> {
    let next = candidate(from, direction);
    if is_wall(grid, next) {
        None
    } else {
        Some(next)
    }
}
