//! Plain-text map rendering
//!
//! Produces the stored grid line by line with the player's symbol
//! overlaid on whatever cell the player currently occupies. The grid
//! itself never changes; the overlay exists only in the rendered text.

use std::io::{self, Write};

use crate::models::Session;

/// The character the player renders as
pub const PLAYER_SYMBOL: char = 'X';

/// Render the maze with the player overlaid, one line per grid row
pub fn render(session: &Session) -> String {
    let grid = session.grid();
    let player = session.player();
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());

    for row in 0..grid.height() as i32 {
        for col in 0..grid.width() as i32 {
            let here = crate::models::Position::new(row, col);
            if here == player {
                out.push(PLAYER_SYMBOL);
            } else {
                out.push(grid.cell_at(here).symbol());
            }
        }
        out.push('\n');
    }
    out
}

/// Write the rendered map to any writer
pub fn write_map<W: Write>(writer: &mut W, session: &Session) -> io::Result<()> {
    writer.write_all(render(session).as_bytes())
}
