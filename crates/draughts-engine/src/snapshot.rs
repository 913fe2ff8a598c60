//! Read-only views of a game handed to presentation layers.

use draughts_core::{Color, Piece, Square, BOARD_SIZE};
use serde::Serialize;

use crate::rules::Outcome;

/// Where the turn state machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    /// The active player has not selected a piece.
    AwaitingSelection,
    /// A piece is selected and its legal targets are known.
    PieceSelected,
    /// The game has ended; only a reset is accepted.
    GameOver,
}

/// Immutable copy of everything a front end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Board contents, row 0 first.
    pub cells: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    pub active: Color,
    pub selection: Option<Square>,
    /// Destinations of the selected piece's legal moves.
    pub targets: Vec<Square>,
    /// Squares the active player may select right now.
    pub selectable: Vec<Square>,
    pub must_capture: bool,
    pub phase: TurnPhase,
    pub outcome: Option<Outcome>,
}

impl Snapshot {
    /// Returns the piece on `sq`.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Returns true if `sq` is highlighted as a move target.
    pub fn is_target(&self, sq: Square) -> bool {
        self.targets.contains(&sq)
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }
}
