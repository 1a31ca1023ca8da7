//! Othello engine exposed to a browser front end through WASM bindings.
//!
//! The exported functions all act on one process-wide [`GameSession`]. Native
//! callers that want more than one game build their own sessions or
//! [`GameEngine`]s instead.

use once_cell::sync::Lazy;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod codec;
pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod session;
pub mod types;

pub use board::Board;
pub use config::EngineConfig;
pub use error::{CodecError, EngineError};
pub use game::{GameEngine, MoveSelector, Phase};
pub use session::GameSession;
pub use types::{Cell, GameState, Player, Position, Winner};

static SESSION: Lazy<GameSession> = Lazy::new(GameSession::default);

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

#[wasm_bindgen]
pub fn start_game() {
    SESSION.start();
}

/// `{ board: [["B" | "W" | "", ...] x8] x8, black, white, player: "B" | "W" }`
#[wasm_bindgen]
pub fn get_current_state() -> Result<JsValue, JsValue> {
    to_js(&SESSION.current_state())
}

/// Attempts a human move at column `x`, row `y`.
#[wasm_bindgen]
pub fn add(x: i32, y: i32) -> bool {
    SESSION.attempt_move(x, y)
}

/// Returns the move played as `{ x, y }`, or `undefined` when none was made.
#[wasm_bindgen]
pub fn computer_move(depth_limit: Option<i32>) -> Result<JsValue, JsValue> {
    to_js(&SESSION.computer_move(depth_limit))
}

#[wasm_bindgen]
pub fn undo() -> bool {
    SESSION.undo()
}

#[wasm_bindgen]
pub fn is_game_over() -> bool {
    SESSION.is_game_over()
}

/// `"B"`, `"W"` or `"T"` once the game is over, `undefined` before.
#[wasm_bindgen]
pub fn get_winner() -> Result<JsValue, JsValue> {
    to_js(&SESSION.winner())
}

#[wasm_bindgen]
pub fn get_valid_moves() -> Result<JsValue, JsValue> {
    to_js(&SESSION.valid_moves())
}

/// `player` is `"B"`, `"W"`, or omitted for the side to move.
#[wasm_bindgen]
pub fn is_valid_move(x: i32, y: i32, player: JsValue) -> Result<bool, JsValue> {
    let player: Option<Player> = serde_wasm_bindgen::from_value(player)?;
    Ok(SESSION.is_valid_move(x, y, player))
}

/// Static evaluation of the live board for `"B"` or `"W"`.
#[wasm_bindgen]
pub fn score_board(player: JsValue) -> Result<i32, JsValue> {
    let player: Player = serde_wasm_bindgen::from_value(player)?;
    Ok(SESSION.score_board(player))
}

#[wasm_bindgen]
pub fn set_state(state: JsValue) -> Result<bool, JsValue> {
    let state: GameState = serde_wasm_bindgen::from_value(state)?;
    Ok(SESSION.set_state(&state))
}

#[wasm_bindgen]
pub fn export_position() -> Vec<u8> {
    SESSION.export_position()
}

#[wasm_bindgen]
pub fn import_position(data: &[u8]) -> bool {
    SESSION.import_position(data)
}

/// Accepts a partial `{ default_depth, max_depth, parallel_root }` object.
#[wasm_bindgen]
pub fn configure(config: JsValue) -> Result<(), JsValue> {
    let config: EngineConfig = serde_wasm_bindgen::from_value(config)?;
    SESSION.configure(config);
    Ok(())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}
