use draughts_core::{Color, Move, Rank, Square};
use draughts_engine::{generate, generate_all, has_capture, Game, GameError, RuleConfig};
use proptest::prelude::*;
use proptest::sample::Index;

fn any_config() -> impl Strategy<Value = RuleConfig> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(flying_kings, backwards_capture, multiple_capture, force_capture)| RuleConfig {
            flying_kings,
            backwards_capture,
            multiple_capture,
            force_capture,
        },
    )
}

/// Every move the active player could make right now, honoring mandatory
/// capture and an in-progress chain.
fn available_moves(game: &Game) -> Vec<Move> {
    let jump_only = game.must_capture() || game.chain().is_some();
    game.selectable()
        .into_iter()
        .flat_map(|sq| {
            generate(game.board(), game.config(), sq, jump_only)
                .as_slice()
                .to_vec()
        })
        .collect()
}

fn check_board(game: &Game) {
    for (sq, piece) in game.board().pieces() {
        assert!(sq.is_dark(), "piece on light square {sq}");
        if piece.rank == Rank::Man {
            assert_ne!(
                sq.row(),
                piece.color.promotion_row(),
                "uncrowned man on {sq}"
            );
        }
    }
    for color in Color::ALL {
        assert!(game.board().count(color) <= 12);
    }
}

fn check_turn_state(game: &Game) {
    if game.is_game_over() || game.chain().is_some() {
        return;
    }
    let config = game.config();
    assert_eq!(
        game.must_capture(),
        config.force_capture && has_capture(game.board(), config, game.active())
    );
    assert!(game.board().count(Color::Red) > 0);
    assert!(game.board().count(Color::Black) > 0);
    assert!(!generate_all(game.board(), config, game.active()).is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Random playouts keep the board and turn state consistent.
    #[test]
    fn playouts_preserve_invariants(
        config in any_config(),
        choices in prop::collection::vec(any::<Index>(), 1..300),
    ) {
        let mut game = Game::new(config);
        let mut captures_this_turn = 0;

        for choice in choices {
            check_board(&game);
            check_turn_state(&game);
            if game.is_game_over() {
                break;
            }

            let moves = available_moves(&game);
            prop_assert!(!moves.is_empty());
            let mv = *choice.get(&moves);

            let before = game.board().count(game.active().opposite());
            let mover = game.active();
            game.select(mv.from()).unwrap();
            let step = game.choose(mv.to()).unwrap();
            prop_assert_eq!(step.mv, mv);

            let after = game.board().count(mover.opposite());
            if mv.is_capture() {
                prop_assert_eq!(after + 1, before);
                captures_this_turn += 1;
            } else {
                prop_assert_eq!(after, before);
            }

            if !config.multiple_capture {
                prop_assert!(!step.turn_continues);
                prop_assert!(captures_this_turn <= 1);
            }
            if step.turn_continues {
                prop_assert_eq!(game.active(), mover);
                prop_assert_eq!(game.chain(), Some(mv.to()));
            } else {
                captures_this_turn = 0;
                prop_assert!(game.is_game_over() || game.active() == mover.opposite());
            }
        }
        check_board(&game);
    }

    /// Selecting a piece without a capture while one is mandatory changes
    /// nothing.
    #[test]
    fn mandatory_capture_rejects_quiet_pieces(
        config in any_config(),
        choices in prop::collection::vec(any::<Index>(), 1..120),
    ) {
        let config = RuleConfig { force_capture: true, ..config };
        let mut game = Game::new(config);

        for choice in choices {
            if game.is_game_over() {
                break;
            }
            if game.must_capture() && game.chain().is_none() {
                let quiet: Vec<Square> = game
                    .board()
                    .pieces_of(game.active())
                    .map(|(sq, _)| sq)
                    .filter(|&sq| generate(game.board(), &config, sq, true).is_empty())
                    .collect();
                for sq in quiet {
                    let before = game.snapshot();
                    let result = game.select(sq).map(|moves| moves.len());
                    prop_assert!(
                        matches!(result, Err(GameError::IllegalSelection { .. })),
                        "quiet piece {} was selectable", sq
                    );
                    prop_assert_eq!(game.snapshot(), before);
                }
            }

            let moves = available_moves(&game);
            let mv = *choice.get(&moves);
            game.select(mv.from()).unwrap();
            game.choose(mv.to()).unwrap();
        }
    }

    /// Rejected coordinate intents never change the game.
    #[test]
    fn rejected_intents_are_noops(
        config in any_config(),
        choices in prop::collection::vec(any::<Index>(), 0..40),
        probes in prop::collection::vec((-3i32..11, -3i32..11), 1..20),
    ) {
        let mut game = Game::new(config);
        for choice in choices {
            if game.is_game_over() {
                break;
            }
            let moves = available_moves(&game);
            let mv = *choice.get(&moves);
            game.select(mv.from()).unwrap();
            game.choose(mv.to()).unwrap();
        }

        for (row, col) in probes {
            let before = game.snapshot();
            let accepted = Square::from_coords(row, col)
                .is_ok_and(|sq| before.selectable.contains(&sq) || before.targets.contains(&sq));
            if accepted {
                continue;
            }
            prop_assert_eq!(game.select_cell(row, col), before.clone());
            prop_assert_eq!(game.choose_move(row, col), before);
        }
    }

    /// Resetting twice with the same rules gives identical games.
    #[test]
    fn reset_is_idempotent(config in any_config()) {
        let mut game = Game::default();
        let first = game.reset_game(config);
        let second = game.reset_game(config);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, Game::new(config).snapshot());
    }
}
