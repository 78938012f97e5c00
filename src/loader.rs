//! Maze and instruction file loading
//!
//! Reads maze files and scripted-instruction files from disk. Structural
//! validation of the maze text itself lives entirely in
//! [`Grid::from_rows`]; this module only gets bytes off disk and reports
//! file-level problems.

use std::fs;
use std::path::Path;

use crate::commands::Command;
use crate::error::{Error, Result};
use crate::models::Grid;

/// Load and validate a maze file
///
/// The file must carry a `.txt` extension and contain exactly
/// `height` lines of `width` characters from the maze alphabet. All
/// structural rules (rectangularity, alphabet, unique start and exit)
/// are enforced by grid construction in one pass.
pub fn load_maze(path: &Path, width: usize, height: usize) -> Result<Grid> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
        return Err(Error::MazeLoadFailed {
            path: path.to_path_buf(),
            reason: "maze file must have a .txt extension".to_string(),
        });
    }

    let text = fs::read_to_string(path).map_err(|err| Error::MazeLoadFailed {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    let grid = Grid::from_text(&text, width, height)?;
    info!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "maze loaded"
    );
    Ok(grid)
}

/// Load a scripted-instruction file
///
/// Every recognized command character in the file (case-insensitive) is
/// kept, in order; whitespace and any other characters are silently
/// dropped. An instruction file with no valid commands yields an empty
/// script, which is not an error.
pub fn load_instructions(path: &Path) -> Result<Vec<Command>> {
    let text = fs::read_to_string(path).map_err(|err| Error::InstructionLoadFailed {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    let commands: Vec<Command> = text.chars().filter_map(Command::from_char).collect();
    info!(
        path = %path.display(),
        commands = commands.len(),
        "instruction script loaded"
    );
    Ok(commands)
}
