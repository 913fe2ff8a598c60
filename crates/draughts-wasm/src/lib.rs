//! WebAssembly bindings for the draughts engine.
//!
//! This crate provides a JavaScript-friendly API over [`Game`], allowing the
//! engine to run in web browsers and Node.js. Storage of the rule settings
//! stays with the page: it reads and writes the JSON record through
//! `getRuleConfig` / `setRuleConfig` and keeps it wherever it likes.
//!
//! # Usage
//!
//! ```javascript
//! import init, { Checkers } from 'draughts-wasm';
//!
//! await init();
//!
//! const game = new Checkers();
//! const saved = localStorage.getItem('checkersSettings');
//! if (saved) {
//!   game.setRuleConfig(saved);
//!   game.resetGame();
//! }
//!
//! let view = game.selectCell(5, 0);
//! console.log(view.targets);
//! view = game.chooseMove(4, 1);
//! console.log(view.active);
//! ```

use draughts_core::{Color, Square};
use draughts_engine::{Game, RuleConfig, Snapshot};
use wasm_bindgen::prelude::*;

/// A draughts game that can be driven from JavaScript.
#[wasm_bindgen]
pub struct Checkers {
    game: Game,
    /// Rules the next reset starts from.
    rules: RuleConfig,
}

#[wasm_bindgen]
impl Checkers {
    /// Creates a new game with every rule enabled.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let rules = RuleConfig::default();
        Checkers {
            game: Game::new(rules),
            rules,
        }
    }

    /// Creates a game from a JSON rule record.
    ///
    /// Returns an error if the record is not valid JSON.
    #[wasm_bindgen(js_name = withRules)]
    pub fn with_rules(json: &str) -> Result<Checkers, JsError> {
        let rules = parse_rules(json)?;
        Ok(Checkers {
            game: Game::new(rules),
            rules,
        })
    }

    /// Clicks a cell to select a piece. Returns the resulting snapshot.
    #[wasm_bindgen(js_name = selectCell)]
    pub fn select_cell(&mut self, row: i32, col: i32) -> Result<JsValue, JsError> {
        to_js(&self.game.select_cell(row, col))
    }

    /// Moves the selected piece to a cell. Returns the resulting snapshot.
    #[wasm_bindgen(js_name = chooseMove)]
    pub fn choose_move(&mut self, row: i32, col: i32) -> Result<JsValue, JsError> {
        to_js(&self.game.choose_move(row, col))
    }

    /// Starts a new game under the current rule record.
    #[wasm_bindgen(js_name = resetGame)]
    pub fn reset_game(&mut self) -> Result<JsValue, JsError> {
        to_js(&self.game.reset_game(self.rules))
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.snapshot())
    }

    /// Returns the rule record as JSON with camelCase keys.
    #[wasm_bindgen(js_name = getRuleConfig)]
    pub fn get_rule_config(&self) -> String {
        // Four booleans always serialize.
        serde_json::to_string(&self.rules).unwrap_or_default()
    }

    /// Replaces the rule record. Takes effect on the next `resetGame`.
    #[wasm_bindgen(js_name = setRuleConfig)]
    pub fn set_rule_config(&mut self, json: &str) -> Result<(), JsError> {
        self.rules = parse_rules(json)?;
        Ok(())
    }

    /// Returns the side to move ("red" or "black").
    #[wasm_bindgen(js_name = activeColor)]
    pub fn active_color(&self) -> String {
        color_name(self.game.active()).to_string()
    }

    /// Returns the piece on a cell as `r`, `R`, `b` or `B`.
    ///
    /// Returns null if the cell is empty or off the board.
    #[wasm_bindgen(js_name = pieceAt)]
    pub fn piece_at(&self, row: i32, col: i32) -> Option<String> {
        let sq = Square::from_coords(row, col).ok()?;
        let piece = self.game.board().piece_at(sq)?;
        Some(piece.to_char().to_string())
    }

    /// Returns true if the game has ended.
    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    /// Returns the winner ("red" or "black"), or null while the game is on.
    pub fn winner(&self) -> Option<String> {
        self.game
            .outcome()
            .map(|outcome| color_name(outcome.winner).to_string())
    }

    #[wasm_bindgen(js_name = turnNumber)]
    pub fn turn_number(&self) -> u32 {
        self.game.turn_number()
    }
}

impl Default for Checkers {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_rules(json: &str) -> Result<RuleConfig, serde_json::Error> {
    serde_json::from_str(json)
}

fn to_js(snapshot: &Snapshot) -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(snapshot)?)
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Red => "red",
        Color::Black => "black",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game() {
        let game = Checkers::new();
        assert_eq!(game.active_color(), "red");
        assert!(!game.is_game_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.turn_number(), 0);
    }

    #[test]
    fn piece_at() {
        let game = Checkers::new();
        assert_eq!(game.piece_at(0, 1), Some("b".to_string()));
        assert_eq!(game.piece_at(5, 0), Some("r".to_string()));
        assert_eq!(game.piece_at(4, 1), None);
        assert_eq!(game.piece_at(9, 9), None);
    }

    #[test]
    fn rule_config_applies_on_reset() {
        let mut game = Checkers::new();
        game.set_rule_config(r#"{"flyingKings":false,"forceCapture":false}"#)
            .unwrap();
        assert_eq!(game.game.config(), &RuleConfig::ALL_ENABLED);

        game.game.reset_game(game.rules);
        assert!(!game.game.config().flying_kings);
        assert!(game.game.config().backwards_capture);

        let json: serde_json::Value = serde_json::from_str(&game.get_rule_config()).unwrap();
        assert_eq!(json["flyingKings"], false);
        assert_eq!(json["multipleCapture"], true);
    }

    #[test]
    fn parse_rules_rejects_garbage() {
        assert!(parse_rules("{").is_err());
        assert_eq!(parse_rules("{}").unwrap(), RuleConfig::default());
    }

    #[test]
    fn moves_through_game() {
        let mut game = Checkers::new();
        game.game.select_cell(5, 0);
        game.game.choose_move(4, 1);
        assert_eq!(game.active_color(), "black");
        assert_eq!(game.piece_at(4, 1), Some("r".to_string()));
        assert_eq!(game.turn_number(), 1);
    }
}
