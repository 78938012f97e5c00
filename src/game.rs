//! The print-driven game loop
//!
//! Runs a session to completion over any input/output pair: interactive
//! play reads command characters from a `BufRead`, scripted play walks a
//! pre-loaded command list. Both paths share one command handler so they
//! cannot disagree about game rules.

use std::io::{BufRead, Write};

use crate::commands::Command;
use crate::error::Result;
use crate::models::{Grid, MoveOutcome, Session};
use crate::render;

/// How a completed session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The player reached the exit
    Won,
    /// The player quit, or interactive input ended
    Quit,
    /// A script ran out of commands before reaching the exit
    ScriptExhausted,
}

/// What the loop should do after a command
enum LoopControl {
    Continue,
    Quit,
}

const PROMPT: &str = "Enter move (w/s/a/d/m/q): ";

fn write_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Welcome to the maze!")?;
    writeln!(out, "Controls:")?;
    writeln!(out, "  w: move up")?;
    writeln!(out, "  s: move down")?;
    writeln!(out, "  a: move left")?;
    writeln!(out, "  d: move right")?;
    writeln!(out, "  m: show the map")?;
    writeln!(out, "  q: quit")?;
    writeln!(out)?;
    Ok(())
}

fn handle_command<W: Write>(
    session: &mut Session<'_>,
    command: Command,
    out: &mut W,
) -> Result<LoopControl> {
    debug!(?command, "handling command");
    match command {
        Command::Move(direction) => {
            if session.advance(direction) == MoveOutcome::Blocked {
                writeln!(out, "Cannot move that way, try a different direction.")?;
            }
        }
        Command::ShowMap => {
            render::write_map(out, session)?;
        }
        Command::Quit => {
            writeln!(out, "Quitting the game.")?;
            return Ok(LoopControl::Quit);
        }
    }
    Ok(LoopControl::Continue)
}

fn write_win<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Congratulations! You found your way out of the maze!")?;
    Ok(())
}

/// Play interactively until the player wins, quits, or input ends
///
/// Each input line contributes its first non-whitespace character as the
/// command; blank lines just re-prompt. End of input is treated like
/// quitting, so piped input cannot spin the loop forever.
pub fn run_interactive<R: BufRead, W: Write>(
    grid: &Grid,
    mut input: R,
    out: &mut W,
) -> Result<GameOutcome> {
    let mut session = Session::new(grid);
    info!("interactive session started");

    write_banner(out)?;
    render::write_map(out, &session)?;

    let mut line = String::new();
    loop {
        if session.is_finished() {
            write_win(out)?;
            info!("session won");
            return Ok(GameOutcome::Won);
        }

        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            writeln!(out, "Quitting the game.")?;
            info!("input ended, session closed");
            return Ok(GameOutcome::Quit);
        }

        let Some(ch) = line.trim().chars().next() else {
            continue;
        };

        match Command::from_char(ch) {
            Some(command) => {
                if let LoopControl::Quit = handle_command(&mut session, command, out)? {
                    info!("session quit by player");
                    return Ok(GameOutcome::Quit);
                }
            }
            None => {
                writeln!(out, "Invalid command, use w/s/a/d/m/q.")?;
            }
        }
    }
}

/// Play a pre-loaded command script
///
/// The script was filtered at load time, so every command in it is
/// valid. If the script ends before the player reaches the exit the
/// session reports that distinctly from a quit.
pub fn run_script<W: Write>(grid: &Grid, script: &[Command], out: &mut W) -> Result<GameOutcome> {
    let mut session = Session::new(grid);
    info!(commands = script.len(), "scripted session started");

    write_banner(out)?;
    render::write_map(out, &session)?;

    for &command in script {
        if session.is_finished() {
            write_win(out)?;
            info!("session won");
            return Ok(GameOutcome::Won);
        }

        if let LoopControl::Quit = handle_command(&mut session, command, out)? {
            info!("session quit by script");
            return Ok(GameOutcome::Quit);
        }
    }

    if session.is_finished() {
        write_win(out)?;
        info!("session won");
        return Ok(GameOutcome::Won);
    }

    writeln!(out, "Ran out of instructions before reaching the exit.")?;
    info!("script exhausted");
    Ok(GameOutcome::ScriptExhausted)
}
