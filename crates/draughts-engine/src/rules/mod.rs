//! Rule configuration and game outcomes.
//!
//! The engine has a single rule family whose legality is tuned by the four
//! toggles in [`RuleConfig`]. A configuration is fixed for the lifetime of a
//! game; changes take effect on the next reset.

mod config;
mod preset;

pub use config::RuleConfig;
pub use preset::{RulePreset, UnknownPreset};

use draughts_core::Color;
use serde::{Deserialize, Serialize};

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The loser has no pieces left on the board.
    NoPiecesRemaining,
    /// The loser is to move but has no legal move with any piece.
    NoMovesAvailable,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndReason::NoPiecesRemaining => write!(f, "no pieces remaining"),
            EndReason::NoMovesAvailable => write!(f, "no moves available"),
        }
    }
}

/// Result of a finished game. Draughts under these rules has no draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Color,
    pub reason: EndReason,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wins: {}", self.winner, self.reason)
    }
}
