//! mazeterm - a terminal maze game with pre-play solvability analysis
//!
//! This library provides the core functionality for mazeterm: a
//! rectangular character-grid maze loaded from a text file, a player
//! moved through it by interactive or scripted commands, and a
//! breadth-first-search analyzer that decides whether the maze can be
//! completed before play begins.
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`models`] - Data structures (Cell, Position, Direction, Grid, Session)
//! - [`movement`] - Move legality: candidate squares, wall and boundary checks
//! - [`pathfinding`] - BFS reachability and shortest-path length
//! - [`mod@error`] - Error types and Result aliases
//!
//! ### I/O Plumbing
//!
//! - [`loader`] - Maze-file and instruction-file loading
//! - [`commands`] - Command-character parsing and validation
//! - [`render`] - Plain-text map rendering with the player overlaid
//! - [`game`] - The interactive and scripted game loops
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> mazeterm::Result<()> {
//! let grid = mazeterm::loader::load_maze(Path::new("maze.txt"), 10, 10)?;
//!
//! if !mazeterm::pathfinding::is_reachable(&grid) {
//!     println!("This maze cannot be completed.");
//!     return Ok(());
//! }
//!
//! let stdin = std::io::stdin();
//! let mut stdout = std::io::stdout();
//! mazeterm::game::run_interactive(&grid, stdin.lock(), &mut stdout)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Safety and Reliability
//!
//! - **No Panics:** All fallible operations return `Result`; the only
//!   panic in the crate is the out-of-bounds `cell_at` programming-error
//!   guard.
//! - **Validated Construction:** A `Grid` that exists passed every
//!   structural check; nothing can mutate it afterwards.
//! - **Bounded Work:** Grids are capped at 100x100, so analysis touches
//!   at most 10,000 cells and always runs to completion.

#[macro_use]
extern crate tracing;

pub mod commands;
pub mod error;
pub mod game;
pub mod loader;
pub mod movement;
pub mod pathfinding;
pub mod render;

// Model modules
pub mod models;

// Re-exports for core functionality
pub use commands::Command;
pub use error::{Error, Result};
pub use game::GameOutcome;
pub use models::{Cell, Direction, Grid, GridError, MoveOutcome, Position, Session};

// Version information
/// The current version of mazeterm from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");
