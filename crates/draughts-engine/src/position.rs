//! Board plus side to move.

use draughts_core::Color;

use crate::board::{Board, BoardError};

/// Complete board state: the grid and whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// Piece placement.
    pub board: Board,

    /// The side to move.
    pub active: Color,
}

impl Position {
    /// Creates a position from a board and the side to move.
    pub fn new(board: Board, active: Color) -> Self {
        Position { board, active }
    }

    /// Creates the standard starting position. Red moves first.
    pub fn standard() -> Self {
        Position::new(Board::standard(), Color::Red)
    }

    /// Creates a position from a text diagram.
    pub fn from_diagram(text: &str, active: Color) -> Result<Self, BoardError> {
        Ok(Position::new(Board::from_diagram(text)?, active))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.active)
    }
}
