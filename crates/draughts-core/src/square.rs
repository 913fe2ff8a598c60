//! Board square and diagonal direction representation.

use crate::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Error returned when coordinates fall outside the 8x8 board.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("square ({row}, {col}) is outside the 8x8 board")]
    OutOfRange { row: i32, col: i32 },
}

/// One of the four diagonal directions.
///
/// "Up" means toward row 0, which is forward for Red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All four diagonals.
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Returns the (row, col) step of this direction.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// The two diagonals leading toward `color`'s promotion row.
    #[inline]
    pub const fn forward(color: Color) -> [Direction; 2] {
        match color {
            Color::Red => [Direction::UpLeft, Direction::UpRight],
            Color::Black => [Direction::DownLeft, Direction::DownRight],
        }
    }

    /// The two diagonals leading back toward `color`'s own home rows.
    #[inline]
    pub const fn backward(color: Color) -> [Direction; 2] {
        Self::forward(color.opposite())
    }
}

/// A square on the draughts board, indexed 0-63.
///
/// Squares are indexed row-major from the top-left corner:
/// - (0, 0) = 0, (0, 7) = 7
/// - (7, 7) = 63
///
/// Only dark squares, where `row + col` is odd, are playable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "Coords", try_from = "Coords")]
pub struct Square(u8);

impl Square {
    /// The 32 playable squares in row-major order.
    pub const DARK: [Square; 32] = {
        let mut out = [Square(0); 32];
        let mut index = 0;
        let mut n = 0;
        while index < 64 {
            if (index / 8 + index % 8) % 2 == 1 {
                out[n] = Square(index);
                n += 1;
            }
            index += 1;
        }
        out
    };

    /// Creates a square from row and column (0-7 each).
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row * BOARD_SIZE + col))
        } else {
            None
        }
    }

    /// Creates a square from untrusted coordinates.
    pub fn from_coords(row: i32, col: i32) -> Result<Self, CoordinateError> {
        let on_board = |v: i32| (0..BOARD_SIZE as i32).contains(&v);
        if on_board(row) && on_board(col) {
            Ok(Square((row * BOARD_SIZE as i32 + col) as u8))
        } else {
            Err(CoordinateError::OutOfRange { row, col })
        }
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Returns true if this is a playable (dark) square.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Returns the square `distance` steps away along `dir`, or `None` if that
    /// leaves the board.
    pub const fn offset(self, dir: Direction, distance: u8) -> Option<Self> {
        let (dr, dc) = dir.delta();
        let row = self.row() as i16 + dr as i16 * distance as i16;
        let col = self.col() as i16 + dc as i16 * distance as i16;
        if row < 0 || col < 0 || row >= BOARD_SIZE as i16 || col >= BOARD_SIZE as i16 {
            return None;
        }
        Some(Square(row as u8 * BOARD_SIZE + col as u8))
    }

    /// Returns the diagonal neighbour along `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Option<Self> {
        self.offset(dir, 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row(), self.col())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

/// Wire form of a square.
#[derive(Serialize, Deserialize)]
struct Coords {
    row: i32,
    col: i32,
}

impl From<Square> for Coords {
    fn from(sq: Square) -> Self {
        Coords {
            row: sq.row() as i32,
            col: sq.col() as i32,
        }
    }
}

impl TryFrom<Coords> for Square {
    type Error = CoordinateError;

    fn try_from(c: Coords) -> Result<Self, Self::Error> {
        Square::from_coords(c.row, c.col)
    }
}
