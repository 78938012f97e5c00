//! Property-based tests for move evaluation
//!
//! The central property: a move is accepted exactly when its candidate
//! square is open, and a rejected move changes nothing. The maze
//! boundary must behave like a wall for every coordinate outside the
//! rectangle, however far outside.

use mazeterm::models::{Direction, Grid, MoveOutcome, Position, Session};
use mazeterm::movement;
use proptest::prelude::*;

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

/// A fixed maze with a mix of open corridors and dead ends.
fn grid() -> Grid {
    Grid::from_rows(
        &[
            "##########",
            "#S   #   #",
            "# ## # # #",
            "# #  # # #",
            "# # ## # #",
            "#   #  #E#",
            "##########",
        ],
        10,
        7,
    )
    .unwrap()
}

proptest! {
    #[test]
    fn test_out_of_bounds_is_always_wall(row in -500i32..500, col in -500i32..500) {
        let grid = grid();
        prop_assume!(!grid.is_in_bounds(Position::new(row, col)));
        prop_assert!(movement::is_wall(&grid, Position::new(row, col)));
    }

    #[test]
    fn test_candidate_is_one_step_away(
        row in -10i32..10,
        col in -10i32..10,
        direction in arb_direction(),
    ) {
        let from = Position::new(row, col);
        let next = movement::candidate(from, direction);
        prop_assert_eq!(from.manhattan_distance(&next), 1);
    }

    #[test]
    fn test_opposite_steps_cancel(
        row in -10i32..10,
        col in -10i32..10,
    ) {
        let from = Position::new(row, col);
        let pairs = [
            (Direction::Up, Direction::Down),
            (Direction::Left, Direction::Right),
        ];
        for (there, back) in pairs {
            let out = movement::candidate(from, there);
            prop_assert_eq!(movement::candidate(out, back), from);
        }
    }

    #[test]
    fn test_try_move_agrees_with_is_wall(
        row in 0i32..7,
        col in 0i32..10,
        direction in arb_direction(),
    ) {
        let grid = grid();
        let from = Position::new(row, col);
        let next = movement::candidate(from, direction);
        match movement::try_move(&grid, from, direction) {
            Some(landed) => {
                prop_assert_eq!(landed, next);
                prop_assert!(!movement::is_wall(&grid, landed));
            }
            None => prop_assert!(movement::is_wall(&grid, next)),
        }
    }

    #[test]
    fn test_session_never_stands_on_a_wall(directions in prop::collection::vec(arb_direction(), 0..64)) {
        let grid = grid();
        let mut session = Session::new(&grid);
        for direction in directions {
            let before = session.player();
            match session.advance(direction) {
                MoveOutcome::Moved => {
                    prop_assert_eq!(
                        session.player(),
                        movement::candidate(before, direction)
                    );
                }
                MoveOutcome::Blocked => {
                    prop_assert_eq!(session.player(), before);
                }
            }
            prop_assert!(!movement::is_wall(&grid, session.player()));
            prop_assert!(grid.is_in_bounds(session.player()));
        }
    }
}
