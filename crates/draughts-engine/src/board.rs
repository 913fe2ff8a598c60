//! Mailbox board representation.

use draughts_core::{BoardDiagram, Color, DiagramError, Piece, Square, BOARD_SIZE};
use thiserror::Error;

/// Maximum number of pieces a color can have on the board.
pub const MAX_PIECES: usize = 12;

/// Errors that can occur when building a board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error(transparent)]
    Diagram(#[from] DiagramError),

    #[error("{0} has more than 12 pieces")]
    TooManyPieces(Color),

    #[error("cannot place a piece on light square {0}")]
    LightSquare(Square),
}

/// The 8x8 grid of optional pieces.
///
/// Invariant: pieces occupy only dark squares and each color has at most
/// [`MAX_PIECES`] pieces. Every public constructor and mutator upholds it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// Creates the standard three-rows-per-side formation.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for sq in Square::DARK {
            for color in Color::ALL {
                if color.home_rows().contains(&sq.row()) {
                    board.cells[sq.index() as usize] = Some(Piece::man(color));
                }
            }
        }
        board
    }

    /// Creates a board from a text diagram.
    pub fn from_diagram(text: &str) -> Result<Self, BoardError> {
        let parsed = BoardDiagram::parse(text)?;
        let mut board = Board::empty();
        for (sq, piece) in parsed.placements {
            board.place(sq, piece)?;
        }
        Ok(board)
    }

    /// Renders the board as a text diagram.
    pub fn to_diagram(&self) -> String {
        BoardDiagram::render(|sq| self.piece_at(sq))
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index() as usize]
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Places a piece, returning whatever occupied the square before.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Result<Option<Piece>, BoardError> {
        if !sq.is_dark() {
            return Err(BoardError::LightSquare(sq));
        }
        let replacing_own = self.piece_at(sq).is_some_and(|p| p.color == piece.color);
        if !replacing_own && self.count(piece.color) >= MAX_PIECES {
            return Err(BoardError::TooManyPieces(piece.color));
        }
        Ok(self.cells[sq.index() as usize].replace(piece))
    }

    /// Removes and returns the piece on `sq`.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index() as usize].take()
    }

    /// Moves whatever is on `from` to `to`. Both must be dark squares.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        debug_assert!(from.is_dark() && to.is_dark());
        let piece = self.remove(from)?;
        self.cells[to.index() as usize] = Some(piece);
        Some(piece)
    }

    /// Replaces the piece on `sq` in place (used for crowning).
    pub(crate) fn crown(&mut self, sq: Square) {
        if let Some(piece) = self.cells[sq.index() as usize].as_mut() {
            *piece = piece.crowned();
        }
    }

    /// Returns the number of pieces of `color`.
    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    /// Iterates over all occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::DARK
            .into_iter()
            .filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterates over the squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Returns the board as rows of cells, row 0 first.
    pub fn rows(&self) -> [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize] {
        let mut rows = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for (sq, piece) in self.pieces() {
            rows[sq.row() as usize][sq.col() as usize] = Some(piece);
        }
        rows
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board(")?;
        writeln!(f, "{}", self.to_diagram())?;
        write!(f, ")")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_diagram())
    }
}
