//! Interactive play loop.
//!
//! Reads one command per line and redraws the board after each one. Generic
//! over its input and output so it can be driven by tests as well as the
//! terminal.

use std::io::{self, BufRead, Write};

use draughts_core::Square;
use draughts_engine::{Game, RuleConfig, Snapshot};

use crate::command::PlayCommand;
use crate::render::{render, RenderOptions};

const HELP: &str = "\
Commands:
  <row> <col>   select a piece, or move the selected piece there
  reset         start a new game
  rules         show the rules in effect
  help          show this message
  quit          leave";

/// A terminal game session.
pub struct Session {
    game: Game,
    /// Rules a reset starts from.
    rules: RuleConfig,
    options: RenderOptions,
}

impl Session {
    pub fn new(rules: RuleConfig, options: RenderOptions) -> Self {
        Session {
            game: Game::new(rules),
            rules,
            options,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Routes a cell click: a highlighted target of the selected piece is a
    /// move, anything else a selection.
    pub fn click(&mut self, row: i32, col: i32) -> Snapshot {
        let is_target = Square::from_coords(row, col).is_ok_and(|sq| {
            self.game.selection().is_some() && self.game.targets().iter().any(|m| m.to() == sq)
        });
        if is_target {
            self.game.choose_move(row, col)
        } else {
            self.game.select_cell(row, col)
        }
    }

    /// Runs the loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", render(&self.game.snapshot(), self.options))?;

        for line in input.lines() {
            let line = line?;
            match PlayCommand::parse(&line) {
                PlayCommand::Quit => break,
                PlayCommand::Empty => continue,
                PlayCommand::Help => writeln!(output, "{HELP}")?,
                PlayCommand::Rules => {
                    for sentence in self.game.config().describe() {
                        writeln!(output, "- {sentence}")?;
                    }
                }
                PlayCommand::Reset => {
                    let snapshot = self.game.reset_game(self.rules);
                    writeln!(output, "{}", render(&snapshot, self.options))?;
                }
                PlayCommand::Cell { row, col } => {
                    let snapshot = self.click(row, col);
                    writeln!(output, "{}", render(&snapshot, self.options))?;
                }
                PlayCommand::Unknown(text) => {
                    tracing::debug!(%text, "unrecognized command");
                    writeln!(output, "Unknown command '{text}'. Type 'help' for a list.")?;
                }
            }
            output.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draughts_core::Color;

    fn run(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn click_selects_then_moves() {
        let mut session = Session::new(RuleConfig::default(), RenderOptions::default());
        let out = run(&mut session, "5 0\n4,1\nquit\n5 2\n");
        assert_eq!(session.game().active(), Color::Black);
        assert_eq!(session.game().turn_number(), 1);
        assert!(out.contains("Black to move"));
        // Lines after quit are not read.
        assert_eq!(session.game().selection(), None);
    }

    #[test]
    fn clicking_another_piece_changes_selection() {
        let mut session = Session::new(RuleConfig::default(), RenderOptions::default());
        session.click(5, 0);
        let snapshot = session.click(5, 2);
        assert_eq!(snapshot.selection, Square::new(5, 2));
        assert_eq!(snapshot.active, Color::Red);
    }

    #[test]
    fn reset_uses_session_rules() {
        let mut session = Session::new(RuleConfig::ALL_DISABLED, RenderOptions::default());
        run(&mut session, "5 0\n4 1\nreset\n");
        assert_eq!(session.game().turn_number(), 0);
        assert_eq!(session.game().config(), &RuleConfig::ALL_DISABLED);
    }

    #[test]
    fn help_rules_and_unknown() {
        let mut session = Session::new(RuleConfig::default(), RenderOptions::default());
        let out = run(&mut session, "help\nrules\njump\n\n99 99\n");
        assert!(out.contains("Commands:"));
        assert!(out.contains("- If a jump is available, you must take it"));
        assert!(out.contains("Unknown command 'jump'"));
        assert_eq!(session.game().selection(), None);
        assert_eq!(session.game().turn_number(), 0);
    }
}
