//! Command parsing and validation
//!
//! Maps single input characters, interactive or scripted, onto game
//! commands. Matching is case-insensitive; anything outside the command
//! alphabet is simply not a command.

use crate::models::Direction;

/// A single game command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the player one step
    Move(Direction),
    /// Print the map with the player overlaid
    ShowMap,
    /// End the session
    Quit,
}

impl Command {
    /// Parse a command character, case-insensitively
    ///
    /// `w`/`s`/`a`/`d` move, `m` shows the map, `q` quits. Returns `None`
    /// for everything else.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'w' => Some(Command::Move(Direction::Up)),
            's' => Some(Command::Move(Direction::Down)),
            'a' => Some(Command::Move(Direction::Left)),
            'd' => Some(Command::Move(Direction::Right)),
            'm' => Some(Command::ShowMap),
            'q' => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Whether a character is a recognized command
pub fn is_command_char(ch: char) -> bool {
    Command::from_char(ch).is_some()
}
