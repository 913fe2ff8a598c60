//! Interactive turn state machine.
//!
//! The [`Game`] struct owns the single mutable game state and is driven by
//! two intents: selecting a piece and choosing one of its targets. It handles:
//! - Mandatory capture gating of selections
//! - Multi-capture chains that keep the turn with the jumping piece
//! - Turn switching and end-of-game detection

use crate::error::{GameError, SelectionReject};
use crate::movegen::{generate, generate_all, has_capture, make_move};
use crate::rules::{EndReason, Outcome, RuleConfig};
use crate::snapshot::{Snapshot, TurnPhase};
use crate::{Board, MoveList, Position};
use draughts_core::{Color, Move, Square};

/// The result of one applied move step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The move that was applied.
    pub mv: Move,
    /// True if the same piece must keep capturing before the turn ends.
    pub turn_continues: bool,
}

/// A draughts game in progress.
///
/// All mutation goes through [`select`](Game::select),
/// [`choose`](Game::choose) and [`reset_game`](Game::reset_game). Rejected
/// intents never change the game.
#[derive(Debug, Clone)]
pub struct Game {
    /// Current board and side to move.
    position: Position,
    /// Rules for this game. Only replaced on reset.
    config: RuleConfig,
    /// Square of the selected piece.
    selection: Option<Square>,
    /// Legal moves of the selected piece.
    targets: MoveList,
    /// Whether the side to move is obliged to capture.
    must_capture: bool,
    /// Square of the piece in the middle of a capture chain.
    chain: Option<Square>,
    /// Set once the game has ended.
    outcome: Option<Outcome>,
    /// Number of completed turns.
    turns: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}

impl Game {
    /// Creates a new game from the standard starting position.
    pub fn new(config: RuleConfig) -> Self {
        Self::from_position(Position::standard(), config)
    }

    /// Creates a game from a custom position.
    ///
    /// Mandatory capture and the end-of-game conditions are evaluated
    /// immediately, so a position with a blocked or empty side starts out
    /// finished.
    pub fn from_position(position: Position, config: RuleConfig) -> Self {
        let mut game = Game {
            position,
            config,
            selection: None,
            targets: MoveList::new(),
            must_capture: false,
            chain: None,
            outcome: None,
            turns: 0,
        };
        game.must_capture = game.compute_must_capture();
        game.check_termination();
        game
    }

    /// Returns the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn board(&self) -> &Board {
        &self.position.board
    }

    /// Returns the side to move.
    pub fn active(&self) -> Color {
        self.position.active
    }

    /// Returns the rules this game is played under.
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    /// Returns the legal moves of the selected piece.
    pub fn targets(&self) -> &[Move] {
        self.targets.as_slice()
    }

    pub fn must_capture(&self) -> bool {
        self.must_capture
    }

    /// Returns the square of the piece that is partway through a capture
    /// chain, if any.
    pub fn chain(&self) -> Option<Square> {
        self.chain
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns the number of completed turns.
    pub fn turn_number(&self) -> u32 {
        self.turns
    }

    pub fn phase(&self) -> TurnPhase {
        if self.outcome.is_some() {
            TurnPhase::GameOver
        } else if self.selection.is_some() {
            TurnPhase::PieceSelected
        } else {
            TurnPhase::AwaitingSelection
        }
    }

    /// Returns the squares the active player may select right now.
    pub fn selectable(&self) -> Vec<Square> {
        if self.outcome.is_some() {
            return Vec::new();
        }
        if let Some(sq) = self.chain {
            return vec![sq];
        }
        let board = &self.position.board;
        board
            .pieces_of(self.position.active)
            .map(|(sq, _)| sq)
            .filter(|&sq| !self.must_capture || !generate(board, &self.config, sq, true).is_empty())
            .collect()
    }

    /// Selects the piece on `square` and returns its legal moves.
    ///
    /// The selection replaces any previous one. While a capture chain is in
    /// progress only the jumping piece may be selected.
    pub fn select(&mut self, square: Square) -> Result<&[Move], GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }

        let reject = |reason| GameError::IllegalSelection { square, reason };
        let piece = self
            .position
            .board
            .piece_at(square)
            .ok_or(reject(SelectionReject::EmptySquare))?;
        if piece.color != self.position.active {
            return Err(reject(SelectionReject::OpponentPiece));
        }
        if self.chain.is_some_and(|chain| chain != square) {
            return Err(reject(SelectionReject::ChainInProgress));
        }

        let jump_only = self.must_capture || self.chain.is_some();
        let moves = generate(&self.position.board, &self.config, square, jump_only);
        if self.must_capture && moves.is_empty() {
            return Err(reject(SelectionReject::CaptureRequired));
        }

        tracing::debug!(%square, targets = moves.len(), "piece selected");
        self.selection = Some(square);
        self.targets = moves;
        Ok(self.targets.as_slice())
    }

    /// Moves the selected piece to `target`.
    ///
    /// If the move was a capture and the piece can capture again, the turn
    /// continues: the piece stays selected with its follow-up captures as
    /// targets. Otherwise the turn passes to the opponent and the game end
    /// conditions are checked.
    pub fn choose(&mut self, target: Square) -> Result<Step, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }
        if self.selection.is_none() {
            return Err(GameError::NoSelection);
        }
        let mv = self
            .targets
            .find_to(target)
            .ok_or(GameError::IllegalMove { target })?;

        tracing::trace!(color = %self.position.active, %mv, "applying move");
        self.position.board = make_move(&self.position.board, mv);

        if mv.is_capture() && self.config.multiple_capture {
            let follow_up = generate(&self.position.board, &self.config, mv.to(), true);
            if !follow_up.is_empty() {
                self.selection = Some(mv.to());
                self.chain = Some(mv.to());
                self.targets = follow_up;
                return Ok(Step {
                    mv,
                    turn_continues: true,
                });
            }
        }

        self.switch_turn();
        Ok(Step {
            mv,
            turn_continues: false,
        })
    }

    /// Selects the piece at `(row, col)` and returns the resulting snapshot.
    ///
    /// Illegal or out-of-range selections are ignored.
    pub fn select_cell(&mut self, row: i32, col: i32) -> Snapshot {
        let result = Square::from_coords(row, col)
            .map_err(GameError::from)
            .and_then(|sq| self.select(sq).map(|_| ()));
        if let Err(e) = result {
            tracing::debug!(row, col, error = %e, "selection ignored");
        }
        self.snapshot()
    }

    /// Moves the selected piece to `(row, col)` and returns the resulting
    /// snapshot.
    ///
    /// Illegal or out-of-range moves are ignored.
    pub fn choose_move(&mut self, row: i32, col: i32) -> Snapshot {
        let result = Square::from_coords(row, col)
            .map_err(GameError::from)
            .and_then(|sq| self.choose(sq).map(|_| ()));
        if let Err(e) = result {
            tracing::debug!(row, col, error = %e, "move ignored");
        }
        self.snapshot()
    }

    /// Starts a new game from the standard position under `config`.
    pub fn reset_game(&mut self, config: RuleConfig) -> Snapshot {
        *self = Game::new(config);
        tracing::info!(?config, "game reset");
        self.snapshot()
    }

    /// Returns a read-only view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.position.board.rows(),
            active: self.position.active,
            selection: self.selection,
            targets: self.targets.as_slice().iter().map(|m| m.to()).collect(),
            selectable: self.selectable(),
            must_capture: self.must_capture,
            phase: self.phase(),
            outcome: self.outcome,
        }
    }

    fn switch_turn(&mut self) {
        self.selection = None;
        self.targets.clear();
        self.chain = None;
        self.position.active = self.position.active.opposite();
        self.turns += 1;
        self.must_capture = self.compute_must_capture();
        self.check_termination();
    }

    fn compute_must_capture(&self) -> bool {
        self.config.force_capture
            && has_capture(&self.position.board, &self.config, self.position.active)
    }

    /// Sets the outcome if a side has run out of pieces or the side to move
    /// has no legal move.
    fn check_termination(&mut self) {
        let board = &self.position.board;
        let outcome = if let Some(loser) = Color::ALL.into_iter().find(|&c| board.count(c) == 0) {
            Some(Outcome {
                winner: loser.opposite(),
                reason: EndReason::NoPiecesRemaining,
            })
        } else if generate_all(board, &self.config, self.position.active).is_empty() {
            Some(Outcome {
                winner: self.position.active.opposite(),
                reason: EndReason::NoMovesAvailable,
            })
        } else {
            None
        };

        if let Some(outcome) = outcome {
            tracing::info!(turns = self.turns, %outcome, "game over");
            self.outcome = Some(outcome);
        }
    }
}
