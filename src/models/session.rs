//! Session Model
//!
//! Mutable player state layered over an immutable [`Grid`]. The session
//! borrows the grid read-only for the whole game; the only thing it owns
//! and mutates is the player coordinate.

use crate::movement;

use super::direction::Direction;
use super::grid::Grid;
use super::position::Position;

/// Result of a single attempted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player advanced to the candidate square
    Moved,
    /// A wall or the maze boundary blocked the move; nothing changed
    Blocked,
}

/// One running game over a grid
#[derive(Debug)]
pub struct Session<'a> {
    grid: &'a Grid,
    player: Position,
}

impl<'a> Session<'a> {
    /// Start a session with the player on the start cell
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            player: grid.start(),
        }
    }

    /// The grid this session plays on
    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// The player's current position
    pub fn player(&self) -> Position {
        self.player
    }

    /// Try to move the player one step
    ///
    /// Delegates the legality check to the move evaluator; a rejected
    /// move leaves the session untouched.
    pub fn advance(&mut self, direction: Direction) -> MoveOutcome {
        match movement::try_move(self.grid, self.player, direction) {
            Some(next) => {
                trace!(from = ?self.player, to = ?next, ?direction, "player moved");
                self.player = next;
                MoveOutcome::Moved
            }
            None => {
                trace!(at = ?self.player, ?direction, "move blocked");
                MoveOutcome::Blocked
            }
        }
    }

    /// Whether the player stands on the exit cell
    ///
    /// Recomputed from the player position on every call so it can never
    /// drift out of sync with the actual state.
    pub fn is_finished(&self) -> bool {
        self.player == self.grid.exit()
    }
}
