//! Maze traversal engine
//!
//! Breadth-first search from the start cell, used once at startup to
//! decide whether a maze is worth playing at all. Reachability and
//! shortest-path length share one search body so the two answers can
//! never drift apart.

use std::collections::VecDeque;

use crate::models::{Direction, Grid, Position};
use crate::movement;

/// Length in steps of the shortest walk from start to exit
///
/// Standard unweighted BFS distance: the start cell is at distance 0 and
/// each search layer adds one step. Returns `None` when no sequence of
/// orthogonal non-wall steps connects start to exit.
///
/// Neighbors expand in the fixed order Up, Down, Left, Right, and cells
/// are marked visited when enqueued, so every cell is enqueued at most
/// once and the search touches at most `width * height` cells. The search
/// is iterative; no recursion is involved at any grid size.
pub fn shortest_path_length(grid: &Grid) -> Option<usize> {
    let width = grid.width();
    let mut visited = vec![false; width * grid.height()];
    let mut frontier: VecDeque<(Position, usize)> = VecDeque::new();

    let flat = |position: Position| position.row as usize * width + position.col as usize;

    visited[flat(grid.start())] = true;
    frontier.push_back((grid.start(), 0));

    while let Some((current, distance)) = frontier.pop_front() {
        if current == grid.exit() {
            debug!(distance, "exit reached");
            return Some(distance);
        }

        for direction in Direction::ALL {
            if let Some(next) = movement::try_move(grid, current, direction) {
                let index = flat(next);
                if !visited[index] {
                    visited[index] = true;
                    frontier.push_back((next, distance + 1));
                }
            }
        }
    }

    debug!("frontier exhausted without reaching the exit");
    None
}

/// Whether the exit can be reached from the start at all
///
/// Same traversal as [`shortest_path_length`]; only the shape of the
/// answer differs.
pub fn is_reachable(grid: &Grid) -> bool {
    shortest_path_length(grid).is_some()
}
