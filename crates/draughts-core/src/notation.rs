//! Plain-text board diagrams.
//!
//! A diagram is eight lines of eight characters, row 0 first:
//!
//! ```text
//! .b.b.b.b
//! b.b.b.b.
//! .b.b.b.b
//! ........
//! ........
//! r.r.r.r.
//! .r.r.r.r
//! r.r.r.r.
//! ```
//!
//! `.` is an empty square, `r`/`R` a red man/king and `b`/`B` a black
//! man/king. Leading and trailing whitespace and blank lines are ignored.

use crate::{Piece, Square, BOARD_SIZE};
use thiserror::Error;

/// Errors that can occur when parsing a board diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("invalid diagram: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid diagram: row {row} has {len} squares, expected 8")]
    InvalidRowLength { row: usize, len: usize },

    #[error("invalid character '{ch}' at ({row}, {col})")]
    InvalidCharacter { row: usize, col: usize, ch: char },

    #[error("piece on light square ({row}, {col})")]
    LightSquare { row: usize, col: usize },
}

/// Parsed diagram data.
///
/// Holds the placements in row-major order. The engine is responsible for
/// turning this into a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDiagram {
    pub placements: Vec<(Square, Piece)>,
}

impl BoardDiagram {
    /// The standard starting formation: three rows per side.
    pub const STANDARD: &'static str = "\
.b.b.b.b
b.b.b.b.
.b.b.b.b
........
........
r.r.r.r.
.r.r.r.r
r.r.r.r.";

    /// Parses a diagram.
    pub fn parse(text: &str) -> Result<Self, DiagramError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE as usize {
            return Err(DiagramError::InvalidRowCount(rows.len()));
        }

        let mut placements = Vec::new();
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != BOARD_SIZE as usize {
                return Err(DiagramError::InvalidRowLength { row, len });
            }
            for (col, ch) in line.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let piece =
                    Piece::from_char(ch).ok_or(DiagramError::InvalidCharacter { row, col, ch })?;
                let square = Square::new(row as u8, col as u8)
                    .ok_or(DiagramError::InvalidCharacter { row, col, ch })?;
                if !square.is_dark() {
                    return Err(DiagramError::LightSquare { row, col });
                }
                placements.push((square, piece));
            }
        }

        Ok(BoardDiagram { placements })
    }

    /// Renders a diagram from a lookup function, one line per row.
    pub fn render<F>(piece_at: F) -> String
    where
        F: Fn(Square) -> Option<Piece>,
    {
        let mut out = String::with_capacity(72);
        for row in 0..BOARD_SIZE {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..BOARD_SIZE {
                let ch = Square::new(row, col)
                    .and_then(&piece_at)
                    .map_or('.', Piece::to_char);
                out.push(ch);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn parse_standard() {
        let d = BoardDiagram::parse(BoardDiagram::STANDARD).unwrap();
        assert_eq!(d.placements.len(), 24);
        let red = d
            .placements
            .iter()
            .filter(|(_, p)| p.color == Color::Red)
            .count();
        assert_eq!(red, 12);
        assert!(d.placements.iter().all(|(s, _)| s.is_dark()));
    }

    #[test]
    fn parse_ignores_indentation_and_blank_lines() {
        let text = "
            ........
            ........
            ...b....
            ....R...
            ........
            ........
            ........
            ........
        ";
        let d = BoardDiagram::parse(text).unwrap();
        assert_eq!(
            d.placements,
            vec![
                (Square::new(2, 3).unwrap(), Piece::man(Color::Black)),
                (Square::new(3, 4).unwrap(), Piece::king(Color::Red)),
            ]
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            BoardDiagram::parse("........"),
            Err(DiagramError::InvalidRowCount(1))
        );

        let short = BoardDiagram::STANDARD.replacen(".b.b.b.b", ".b.b.b.", 1);
        assert_eq!(
            BoardDiagram::parse(&short),
            Err(DiagramError::InvalidRowLength { row: 0, len: 7 })
        );

        let bad = BoardDiagram::STANDARD.replacen(".b.b.b.b", ".x.b.b.b", 1);
        assert_eq!(
            BoardDiagram::parse(&bad),
            Err(DiagramError::InvalidCharacter {
                row: 0,
                col: 1,
                ch: 'x'
            })
        );

        let light = BoardDiagram::STANDARD.replacen(".b.b.b.b", "bb.b.b.b", 1);
        assert_eq!(
            BoardDiagram::parse(&light),
            Err(DiagramError::LightSquare { row: 0, col: 0 })
        );
    }

    #[test]
    fn render_matches_parse() {
        let d = BoardDiagram::parse(BoardDiagram::STANDARD).unwrap();
        let rendered = BoardDiagram::render(|sq| {
            d.placements
                .iter()
                .find(|(s, _)| *s == sq)
                .map(|(_, p)| *p)
        });
        assert_eq!(rendered, BoardDiagram::STANDARD);
    }
}
