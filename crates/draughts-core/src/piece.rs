//! Draughts piece representation.

use crate::Color;
use serde::{Deserialize, Serialize};

/// The rank of a piece: an uncrowned man or a king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Rank {
    Man = 0,
    King = 1,
}

/// A piece on the board: a color and a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    /// Creates a piece.
    #[inline]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Piece { color, rank }
    }

    /// Creates an uncrowned man.
    #[inline]
    pub const fn man(color: Color) -> Self {
        Self::new(color, Rank::Man)
    }

    /// Creates a king.
    #[inline]
    pub const fn king(color: Color) -> Self {
        Self::new(color, Rank::King)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Returns this piece crowned. Crowning a king is a no-op.
    #[inline]
    pub const fn crowned(self) -> Self {
        Self::king(self.color)
    }

    /// Returns the diagram character for this piece.
    ///
    /// Red is `r`, Black is `b`; kings are uppercase.
    pub const fn to_char(self) -> char {
        match (self.color, self.rank) {
            (Color::Red, Rank::Man) => 'r',
            (Color::Red, Rank::King) => 'R',
            (Color::Black, Rank::Man) => 'b',
            (Color::Black, Rank::King) => 'B',
        }
    }

    /// Parses a diagram character into a piece.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'r' => Some(Piece::man(Color::Red)),
            'R' => Some(Piece::king(Color::Red)),
            'b' => Some(Piece::man(Color::Black)),
            'B' => Some(Piece::king(Color::Black)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rank = match self.rank {
            Rank::Man => "man",
            Rank::King => "king",
        };
        write!(f, "{} {}", self.color, rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_chars() {
        assert_eq!(Piece::man(Color::Red).to_char(), 'r');
        assert_eq!(Piece::king(Color::Red).to_char(), 'R');
        assert_eq!(Piece::man(Color::Black).to_char(), 'b');
        assert_eq!(Piece::king(Color::Black).to_char(), 'B');
    }

    #[test]
    fn piece_from_char() {
        assert_eq!(Piece::from_char('R'), Some(Piece::king(Color::Red)));
        assert_eq!(Piece::from_char('b'), Some(Piece::man(Color::Black)));
        assert_eq!(Piece::from_char('.'), None);
        assert_eq!(Piece::from_char('k'), None);
    }

    #[test]
    fn crowning() {
        let man = Piece::man(Color::Black);
        assert!(!man.is_king());
        assert!(man.crowned().is_king());
        assert_eq!(man.crowned().color, Color::Black);
        assert_eq!(man.crowned().crowned(), man.crowned());
    }

    #[test]
    fn display() {
        assert_eq!(Piece::man(Color::Red).to_string(), "Red man");
        assert_eq!(Piece::king(Color::Black).to_string(), "Black king");
    }
}
