//! Errors raised by game operations.
//!
//! None of these are fatal. A rejected intent leaves the game untouched, and
//! the coordinate-based entry points on [`Game`](crate::Game) absorb them
//! entirely.

use draughts_core::{CoordinateError, Square};
use thiserror::Error;

/// Why a square could not be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReject {
    /// Nothing stands on the square.
    EmptySquare,
    /// The piece belongs to the player who is not on turn.
    OpponentPiece,
    /// A capture is mandatory and this piece has none.
    CaptureRequired,
    /// A capture chain is in progress with a different piece.
    ChainInProgress,
}

impl std::fmt::Display for SelectionReject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            SelectionReject::EmptySquare => "the square is empty",
            SelectionReject::OpponentPiece => "the piece belongs to the opponent",
            SelectionReject::CaptureRequired => "a capture is required and this piece has none",
            SelectionReject::ChainInProgress => "another piece is in the middle of a capture chain",
        };
        f.write_str(reason)
    }
}

/// Error type for game operations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GameError {
    /// The supplied coordinates are off the board.
    #[error(transparent)]
    InputOutOfRange(#[from] CoordinateError),

    /// The square cannot be selected right now.
    #[error("cannot select {square}: {reason}")]
    IllegalSelection {
        square: Square,
        reason: SelectionReject,
    },

    /// The target is not among the selected piece's legal moves.
    #[error("no legal move to {target}")]
    IllegalMove { target: Square },

    /// A move was requested before any piece was selected.
    #[error("no piece is selected")]
    NoSelection,

    /// The game has already ended.
    #[error("game has already ended")]
    GameOver,
}
