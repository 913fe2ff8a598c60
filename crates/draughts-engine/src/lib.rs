//! Draughts rules engine with configurable rule variants.
//!
//! This crate provides:
//! - [`Board`] - 8x8 mailbox board holding pieces on the 32 dark squares
//! - [`Position`] - Board plus the side to move
//! - [`RuleConfig`] - The four rule toggles and named [`RulePreset`]s
//! - Move generation per piece, honoring capture priority
//! - [`Game`] - The interactive turn state machine
//! - [`Snapshot`] - Read-only views for presentation layers
//! - Rule settings persistence through a [`SettingsStore`]
//!
//! # Example
//!
//! ```
//! use draughts_engine::{Game, RuleConfig, TurnPhase};
//!
//! let mut game = Game::new(RuleConfig::default());
//!
//! // Select the red man on (5, 0); its only move is to (4, 1).
//! let snapshot = game.select_cell(5, 0);
//! assert_eq!(snapshot.targets.len(), 1);
//!
//! let snapshot = game.choose_move(4, 1);
//! assert_eq!(snapshot.phase, TurnPhase::AwaitingSelection);
//! println!("{}", game.position());
//! ```

mod board;
mod error;
mod game;
pub mod movegen;
mod position;
pub mod rules;
pub mod settings;
mod snapshot;

pub use board::{Board, BoardError, MAX_PIECES};
pub use error::{GameError, SelectionReject};
pub use game::{Game, Step};
pub use movegen::{generate, generate_all, has_capture, make_move, MoveList};
pub use position::Position;
pub use rules::{EndReason, Outcome, RuleConfig, RulePreset, UnknownPreset};
pub use settings::{FileStore, MemoryStore, RuleSettings, SettingsError, SettingsStore};
pub use snapshot::{Snapshot, TurnPhase};
