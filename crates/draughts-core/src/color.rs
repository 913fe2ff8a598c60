//! Player color representation.

use serde::{Deserialize, Serialize};

/// Represents the two players in draughts.
///
/// Red starts at the bottom of the board (rows 5-7) and moves toward row 0;
/// Black starts at the top (rows 0-2) and moves toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Black = 1,
}

impl Color {
    /// Both colors, Red first.
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Returns the row on which this color's men are crowned (0 for Red, 7 for Black).
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Red => 0,
            Color::Black => 7,
        }
    }

    /// Returns the rows this color occupies in the standard formation.
    #[inline]
    pub const fn home_rows(self) -> std::ops::Range<u8> {
        match self {
            Color::Red => 5..8,
            Color::Black => 0..3,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Black => write!(f, "Black"),
        }
    }
}
