//! Move generation.
//!
//! Generation is per piece: [`generate`] returns the legal destinations of
//! the piece on one square. A piece that can capture never offers quiet
//! moves, whatever the `force_capture` setting. That toggle only gates which
//! pieces the [`Game`](crate::Game) lets a player select.

use crate::board::Board;
use crate::rules::RuleConfig;
use draughts_core::{Color, Direction, Move, Piece, Square};

/// A list of moves with a fixed maximum capacity.
///
/// Twelve pieces can never produce more than a few dozen moves in total, so
/// we use a fixed-size array to avoid heap allocations during generation.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Upper bound on the moves held by one list.
    pub const MAX_MOVES: usize = 256;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Appends every move of `other`.
    pub fn extend_from(&mut self, other: &MoveList) {
        for &m in other {
            self.push(m);
        }
    }

    /// Returns the move landing on `to`, if any.
    pub fn find_to(&self, to: Square) -> Option<Move> {
        self.as_slice().iter().copied().find(|m| m.to() == to)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates the legal moves of the piece on `from`.
///
/// Returns an empty list if `from` is empty. If the piece has at least one
/// capture, or `jump_only` is set, only captures are returned.
pub fn generate(board: &Board, config: &RuleConfig, from: Square, jump_only: bool) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };

    generate_captures(board, config, from, piece, &mut moves);
    if !moves.is_empty() || jump_only {
        return moves;
    }

    generate_quiet(board, config, from, piece, &mut moves);
    moves
}

/// Returns true if any piece of `color` has a capture available.
pub fn has_capture(board: &Board, config: &RuleConfig, color: Color) -> bool {
    board.pieces_of(color).any(|(sq, piece)| {
        let mut moves = MoveList::new();
        generate_captures(board, config, sq, piece, &mut moves);
        !moves.is_empty()
    })
}

/// Generates the moves of every piece of `color`, each piece following the
/// same capture priority as [`generate`].
pub fn generate_all(board: &Board, config: &RuleConfig, color: Color) -> MoveList {
    let mut all = MoveList::new();
    for (sq, _) in board.pieces_of(color) {
        all.extend_from(&generate(board, config, sq, false));
    }
    all
}

/// Applies one move step to a board, returning the new board.
///
/// Moves the piece, removes the captured piece and crowns the mover if the
/// move promotes. The move is assumed to come from [`generate`].
pub fn make_move(board: &Board, m: Move) -> Board {
    let mut next = board.clone();
    next.relocate(m.from(), m.to());
    if let Some(captured) = m.captured() {
        next.remove(captured);
    }
    if m.promotes() {
        next.crown(m.to());
    }
    next
}

/// Diagonals a piece moves along without capturing.
fn step_directions(piece: Piece) -> &'static [Direction] {
    const RED_FORWARD: [Direction; 2] = Direction::forward(Color::Red);
    const BLACK_FORWARD: [Direction; 2] = Direction::forward(Color::Black);
    match (piece.is_king(), piece.color) {
        (true, _) => &Direction::ALL,
        (false, Color::Red) => &RED_FORWARD,
        (false, Color::Black) => &BLACK_FORWARD,
    }
}

/// Diagonals a piece checks for captures: its step directions, plus the
/// backward pair for men when backward capture is enabled.
fn jump_directions(piece: Piece, config: &RuleConfig) -> &'static [Direction] {
    if !piece.is_king() && config.backwards_capture {
        &Direction::ALL
    } else {
        step_directions(piece)
    }
}

fn generate_captures(
    board: &Board,
    config: &RuleConfig,
    from: Square,
    piece: Piece,
    moves: &mut MoveList,
) {
    for &dir in jump_directions(piece, config) {
        // Flying kings slide on quiet moves only; every capture is a short jump.
        let Some(victim) = from.step(dir) else {
            continue;
        };
        let is_enemy = board
            .piece_at(victim)
            .is_some_and(|p| p.color != piece.color);
        if !is_enemy {
            continue;
        }
        if let Some(landing) = victim.step(dir) {
            if board.is_empty(landing) {
                let m = Move::capture(from, victim, landing).with_promotion(promotes(piece, landing));
                moves.push(m);
            }
        }
    }
}

fn generate_quiet(
    board: &Board,
    config: &RuleConfig,
    from: Square,
    piece: Piece,
    moves: &mut MoveList,
) {
    let flying = piece.is_king() && config.flying_kings;
    for &dir in step_directions(piece) {
        let mut current = from.step(dir);
        while let Some(to) = current {
            if !board.is_empty(to) {
                break;
            }
            moves.push(Move::quiet(from, to).with_promotion(promotes(piece, to)));
            if !flying {
                break;
            }
            current = to.step(dir);
        }
    }
}

#[inline]
fn promotes(piece: Piece, to: Square) -> bool {
    !piece.is_king() && to.row() == piece.color.promotion_row()
}
