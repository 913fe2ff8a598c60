//! Move representation.

use crate::Square;
use std::fmt;

/// A single move step.
///
/// A capture jumps exactly one opposing piece. Multi-capture turns are a
/// chain of these steps made by the same piece, never one move with several
/// captured squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    captured: Option<Square>,
    promotes: bool,
}

impl Move {
    /// Creates a non-capturing move.
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: None,
            promotes: false,
        }
    }

    /// Creates a capture of the piece on `captured`, landing on `to`.
    #[inline]
    pub const fn capture(from: Square, captured: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: Some(captured),
            promotes: false,
        }
    }

    /// Marks whether the moving piece is crowned on landing.
    #[inline]
    pub const fn with_promotion(mut self, promotes: bool) -> Self {
        self.promotes = promotes;
        self
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the square of the jumped piece, if this is a capture.
    #[inline]
    pub const fn captured(self) -> Option<Square> {
        self.captured
    }

    /// Returns the captured squares in jump order (empty for a quiet move).
    #[inline]
    pub fn captured_squares(&self) -> &[Square] {
        self.captured.as_slice()
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if the moving man is crowned when it lands.
    #[inline]
    pub const fn promotes(self) -> bool {
        self.promotes
    }

    /// A null move (used as placeholder, not a legal move).
    pub const NULL: Move = Move {
        from: Square::DARK[0],
        to: Square::DARK[0],
        captured: None,
        promotes: false,
    };
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)?;
        if self.promotes {
            write!(f, "=K")?;
        }
        Ok(())
    }
}
