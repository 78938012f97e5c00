//! mazeterm - a terminal maze game
//!
//! Loads a maze file, checks that the exit is reachable at all, and then
//! runs the interactive loop (or plays a scripted instruction file).

use std::env;
use std::io;
use std::path::PathBuf;
use std::process;

use tracing::{error, info};

use mazeterm::error::{Error, Result};
use mazeterm::models::{MAX_DIMENSION, MIN_DIMENSION};
use mazeterm::{game, loader, pathfinding};

/// Parsed command-line arguments
#[derive(Debug)]
struct AppArgs {
    /// Maze file path
    maze_path: PathBuf,
    /// Expected maze width
    width: usize,
    /// Expected maze height
    height: usize,
    /// Instruction file for scripted playback
    instructions: Option<PathBuf>,
    /// Enable debug logging
    debug: bool,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut positional: Vec<String> = Vec::new();
        let mut instructions = None;
        let mut debug = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--instructions" | "-i" => {
                    if i + 1 < args.len() {
                        instructions = Some(PathBuf::from(&args[i + 1]));
                        i += 1;
                    } else {
                        return Err("Missing instruction file path".into());
                    }
                }
                "--debug" | "-d" => {
                    debug = true;
                }
                "--help" | "-?" => {
                    print_help(&args[0]);
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("mazeterm v{}", env!("CARGO_PKG_VERSION"));
                    process::exit(0);
                }
                arg if arg.starts_with('-') => {
                    return Err(format!("Unknown option: {}", arg).into());
                }
                _ => {
                    positional.push(args[i].clone());
                }
            }
            i += 1;
        }

        if positional.len() != 3 {
            return Err(Error::InvalidArgument {
                name: "arguments",
                reason: format!(
                    "expected <maze-file> <width> <height>, got {} positional arguments",
                    positional.len()
                ),
            });
        }

        let maze_path = PathBuf::from(&positional[0]);
        let width = parse_dimension("width", &positional[1])?;
        let height = parse_dimension("height", &positional[2])?;

        Ok(AppArgs {
            maze_path,
            width,
            height,
            instructions,
            debug,
        })
    }
}

/// Parse a width/height argument and check the allowed range
fn parse_dimension(name: &'static str, value: &str) -> Result<usize> {
    let parsed: usize = value.parse().map_err(|_| Error::InvalidArgument {
        name,
        reason: format!("'{}' is not a whole number", value),
    })?;

    if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&parsed) {
        return Err(Error::InvalidArgument {
            name,
            reason: format!(
                "{} is out of range (must be between {} and {})",
                parsed, MIN_DIMENSION, MAX_DIMENSION
            ),
        });
    }

    Ok(parsed)
}

/// Print help information
fn print_help(program: &str) {
    println!("mazeterm - a terminal maze game");
    println!();
    println!("USAGE:");
    println!("    {} <maze-file> <width> <height> [OPTIONS]", program);
    println!();
    println!("ARGS:");
    println!("    <maze-file>    Maze file (.txt): '#' wall, ' ' path, 'S' start, 'E' exit");
    println!(
        "    <width>        Maze width in cells ({}-{})",
        MIN_DIMENSION, MAX_DIMENSION
    );
    println!(
        "    <height>       Maze height in cells ({}-{})",
        MIN_DIMENSION, MAX_DIMENSION
    );
    println!();
    println!("OPTIONS:");
    println!("    -i, --instructions <file>    Play a scripted instruction file");
    println!("    -d, --debug                  Enable debug logging");
    println!("    -v, --version                Print version information");
    println!("    -?, --help                   Print this help message");
}

fn run(args: &AppArgs) -> Result<()> {
    let grid = loader::load_maze(&args.maze_path, args.width, args.height)?;

    match pathfinding::shortest_path_length(&grid) {
        None => {
            // An unsolvable maze is an ordinary end state, not a failure.
            println!("This maze cannot be completed.");
            info!("exit unreachable, session not started");
            return Ok(());
        }
        Some(distance) => {
            info!(distance, "maze is solvable");
        }
    }

    let stdout = io::stdout();
    let outcome = match &args.instructions {
        Some(path) => {
            let script = loader::load_instructions(path)?;
            game::run_script(&grid, &script, &mut stdout.lock())?
        }
        None => {
            let stdin = io::stdin();
            game::run_interactive(&grid, stdin.lock(), &mut stdout.lock())?
        }
    };

    info!(?outcome, "session finished");
    Ok(())
}

fn main() {
    let args = match AppArgs::parse() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("Run with --help for usage.");
            process::exit(2);
        }
    };

    let log_level = if args.debug { "debug" } else { "warn" };
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    info!("🚀 Starting mazeterm v{}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(&args) {
        error!("{}", err);
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
