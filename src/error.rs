//! Error types and Result aliases for mazeterm

use std::fmt;
use std::path::PathBuf;

use crate::models::GridError;

/// Result type alias for mazeterm operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for mazeterm
#[derive(Debug)]
pub enum Error {
    // === File errors ===
    /// Failed to read the maze file
    MazeLoadFailed {
        path: PathBuf,
        reason: String,
    },

    /// Failed to read the instruction file
    InstructionLoadFailed {
        path: PathBuf,
        reason: String,
    },

    // === Argument errors ===
    /// A command-line argument failed validation
    InvalidArgument {
        name: &'static str,
        reason: String,
    },

    // === Maze errors ===
    /// The maze text failed structural validation
    Grid(GridError),

    // === I/O errors (kept for compatibility) ===
    /// I/O errors
    Io(std::io::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors (for cases not yet categorized)
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MazeLoadFailed { path, reason } => {
                write!(f, "Failed to load maze from '{}': {}", path.display(), reason)
            }
            Error::InstructionLoadFailed { path, reason } => {
                write!(
                    f,
                    "Failed to load instructions from '{}': {}",
                    path.display(),
                    reason
                )
            }
            Error::InvalidArgument { name, reason } => {
                write!(f, "Invalid argument '{}': {}", name, reason)
            }
            Error::Grid(err) => write!(f, "Invalid maze: {}", err),
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<GridError> for Error {
    fn from(err: GridError) -> Self {
        Error::Grid(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
