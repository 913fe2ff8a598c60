//! Browser tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use draughts_wasm::Checkers;
use serde_json::{json, Value};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn to_json(view: JsValue) -> Value {
    serde_wasm_bindgen::from_value(view).unwrap()
}

#[wasm_bindgen_test]
fn select_and_move() {
    let mut game = Checkers::new();
    let view = to_json(game.select_cell(5, 0).unwrap());
    assert_eq!(view["selection"], json!({"row": 5, "col": 0}));
    assert_eq!(view["targets"], json!([{"row": 4, "col": 1}]));

    let view = to_json(game.choose_move(4, 1).unwrap());
    assert_eq!(view["active"], "black");
    assert_eq!(view["phase"], "awaiting_selection");
    assert_eq!(game.piece_at(4, 1).as_deref(), Some("r"));
}

#[wasm_bindgen_test]
fn rejected_click_keeps_state() {
    let mut game = Checkers::new();
    let before = to_json(game.snapshot().unwrap());
    let after = to_json(game.select_cell(9, 9).unwrap());
    assert_eq!(before, after);
}

#[wasm_bindgen_test]
fn reset_applies_saved_rules() {
    let mut game = Checkers::new();
    game.set_rule_config(r#"{"forceCapture":false}"#).unwrap();
    let view = to_json(game.reset_game().unwrap());
    assert_eq!(view["must_capture"], false);
    assert_eq!(game.turn_number(), 0);
}
