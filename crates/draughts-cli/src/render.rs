//! Text rendering of game snapshots.

use draughts_core::{Square, BOARD_SIZE};
use draughts_engine::{Snapshot, TurnPhase};
use std::fmt::Write;

/// What to draw besides the pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_coordinates: bool,
    pub show_targets: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            show_coordinates: true,
            show_targets: true,
        }
    }
}

/// Draws the board followed by a status line.
///
/// Pieces are `r`/`R` and `b`/`B`, empty squares `.`, and highlighted
/// targets `*`.
pub fn render(snapshot: &Snapshot, options: RenderOptions) -> String {
    let mut out = String::new();
    if options.show_coordinates {
        out.push_str("  ");
        for col in 0..BOARD_SIZE {
            let _ = write!(out, " {col}");
        }
        out.push('\n');
    }

    for (row, cells) in snapshot.cells.iter().enumerate() {
        if options.show_coordinates {
            let _ = write!(out, "{row} ");
        }
        for (col, cell) in cells.iter().enumerate() {
            let target = Square::new(row as u8, col as u8)
                .is_some_and(|sq| options.show_targets && snapshot.is_target(sq));
            let ch = match cell {
                Some(piece) => piece.to_char(),
                None if target => '*',
                None => '.',
            };
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }

    out.push_str(&status(snapshot));
    out
}

/// One-line summary of whose turn it is or how the game ended.
pub fn status(snapshot: &Snapshot) -> String {
    if let Some(outcome) = snapshot.outcome {
        return format!("Game over. {outcome}");
    }
    let mut line = format!("{} to move", snapshot.active);
    if snapshot.must_capture {
        line.push_str(", capture required");
    }
    if snapshot.phase == TurnPhase::PieceSelected {
        if let Some(sq) = snapshot.selection {
            let _ = write!(line, " (selected {sq})");
        }
    }
    line
}
