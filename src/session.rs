//! Serialized access to one live game.
//!
//! Every mutating command takes the write lock for its whole duration,
//! including the computer's search, so no other command can interleave with
//! it. Queries share the read lock and never see a half-applied move.
//! Failures are reported as `false`/`None` and logged, never raised.

use parking_lot::RwLock;
use tracing::warn;

use crate::board::Board;
use crate::codec;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::game::GameEngine;
use crate::types::{GameState, Player, Position, Winner};

pub struct GameSession {
    engine: RwLock<GameEngine>,
}

impl GameSession {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_engine(GameEngine::with_config(config))
    }

    pub fn with_engine(engine: GameEngine) -> Self {
        Self {
            engine: RwLock::new(engine),
        }
    }

    pub fn start(&self) {
        self.engine.write().start();
    }

    pub fn configure(&self, config: EngineConfig) {
        self.engine.write().reconfigure(config);
    }

    pub fn current_state(&self) -> GameState {
        self.engine.read().state()
    }

    /// Attempts a move at column `x`, row `y`.
    pub fn attempt_move(&self, x: i32, y: i32) -> bool {
        let Some(pos) = Position::checked(x, y) else {
            return rejected("attempt move", EngineError::OutOfRange { x, y });
        };
        match self.engine.write().attempt_move(pos) {
            Ok(_) => true,
            Err(err) => rejected("attempt move", err),
        }
    }

    /// Plays a computer move on the live game and reports the move made.
    pub fn computer_move(&self, depth_limit: Option<i32>) -> Option<Position> {
        match self.engine.write().computer_move(depth_limit) {
            Ok(pos) => Some(pos),
            Err(err) => {
                rejected("computer move", err);
                None
            }
        }
    }

    /// `false` when there is nothing to undo.
    pub fn undo(&self) -> bool {
        match self.engine.write().undo() {
            Ok(()) => true,
            Err(err) => rejected("undo", err),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.engine.read().is_terminal()
    }

    pub fn winner(&self) -> Option<Winner> {
        self.engine.read().winner()
    }

    pub fn valid_moves(&self) -> Vec<Position> {
        self.engine.read().valid_moves()
    }

    /// Checks a move for `player`, or for the side to move when `None`.
    pub fn is_valid_move(&self, x: i32, y: i32, player: Option<Player>) -> bool {
        Position::checked(x, y).is_some_and(|pos| self.engine.read().is_valid_move(pos, player))
    }

    pub fn score_board(&self, player: Player) -> i32 {
        self.engine.read().score_board(player)
    }

    /// Replaces the live position with `state`. Disc counts in `state` are ignored.
    pub fn set_state(&self, state: &GameState) -> bool {
        match Board::from_rows(&state.board) {
            Ok(board) => {
                self.engine.write().load_position(board, state.player);
                true
            }
            Err(err) => rejected("set state", err),
        }
    }

    pub fn export_position(&self) -> Vec<u8> {
        let engine = self.engine.read();
        codec::encode_position(engine.board(), engine.current_player())
    }

    pub fn import_position(&self, data: &[u8]) -> bool {
        match codec::decode_position(data) {
            Ok((board, player)) => {
                self.engine.write().load_position(board, player);
                true
            }
            Err(err) => {
                warn!(%err, "import position rejected");
                false
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn rejected(command: &str, err: EngineError) -> bool {
    warn!(command, %err, "command rejected");
    false
}
