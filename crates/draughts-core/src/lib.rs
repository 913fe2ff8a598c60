//! Core types for draughts.
//!
//! This crate provides the fundamental types used across the draughts engine:
//! - [`Piece`], [`Rank`] and [`Color`] for piece representation
//! - [`Square`] and [`Direction`] for board coordinates
//! - [`Move`] for single move steps
//! - Plain-text board diagrams

mod color;
mod mov;
mod notation;
mod piece;
mod square;

pub use color::Color;
pub use mov::Move;
pub use notation::{BoardDiagram, DiagramError};
pub use piece::{Piece, Rank};
pub use square::{CoordinateError, Direction, Square, BOARD_SIZE};
