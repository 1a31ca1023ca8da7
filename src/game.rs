use tracing::{debug, info};

use crate::ai::Searcher;
use crate::ai::heuristic;
use crate::board::{Board, mask_to_positions};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::history::{HistoryStack, Snapshot};
use crate::types::{GameState, Player, Position, Winner};

/// Chooses the computer's move. Implementations must not assume they see the
/// live board; they get a copy.
pub trait MoveSelector: Send + Sync {
    fn select_move(&mut self, board: &Board, player: Player, depth: u8) -> Option<Position>;
}

impl MoveSelector for Searcher {
    fn select_move(&mut self, board: &Board, player: Player, depth: u8) -> Option<Position> {
        self.best_move(board, player, depth)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Terminal,
}

/// Owns the live game: board, side to move, phase, and undo history.
pub struct GameEngine {
    board: Board,
    current_player: Player,
    phase: Phase,
    history: HistoryStack,
    config: EngineConfig,
    selector: Box<dyn MoveSelector>,
}

impl GameEngine {
    /// Creates an engine already holding the standard opening, so queries are
    /// valid before the first `start`.
    pub fn new(config: EngineConfig, selector: Box<dyn MoveSelector>) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Black,
            phase: Phase::InProgress,
            history: HistoryStack::new(),
            config,
            selector,
        }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::new(
            config,
            Box::new(Searcher::with_parallel_root(config.parallel_root)),
        )
    }

    /// Replaces the config and reinstalls the default searcher built from it.
    /// The current game is left as is.
    pub fn reconfigure(&mut self, config: EngineConfig) {
        self.config = config;
        self.selector = Box::new(Searcher::with_parallel_root(config.parallel_root));
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resets to the standard opening with Black to move and an empty history.
    pub fn start(&mut self) {
        self.board = Board::new();
        self.current_player = Player::Black;
        self.phase = Phase::InProgress;
        self.history.clear();
        info!("new game started");
    }

    /// Plays `pos` for the side to move. Returns the flipped squares.
    pub fn attempt_move(&mut self, pos: Position) -> EngineResult<Vec<Position>> {
        let flips = self.apply_move(pos)?;
        Ok(mask_to_positions(flips))
    }

    /// Lets the selector pick a move for the side to move and plays it like a
    /// human move. `depth` defaults to the configured depth and is clamped.
    pub fn computer_move(&mut self, depth: Option<i32>) -> EngineResult<Position> {
        if self.phase == Phase::Terminal {
            return Err(EngineError::GameOver);
        }

        let depth = self.config.resolve_depth(depth);
        let player = self.current_player;
        let board = self.board;
        let pos = self
            .selector
            .select_move(&board, player, depth)
            .ok_or(EngineError::NoLegalMove)?;

        self.apply_move(pos)?;
        debug!(?player, depth, x = pos.x, y = pos.y, "computer moved");
        Ok(pos)
    }

    /// Restores the state from before the last applied move.
    pub fn undo(&mut self) -> EngineResult<()> {
        let snapshot = self.history.pop().ok_or(EngineError::HistoryUnderflow)?;
        self.board = snapshot.board;
        self.current_player = snapshot.player;
        self.phase = snapshot.phase;
        debug!(remaining = self.history.len(), "move undone");
        Ok(())
    }

    /// Replaces the live position wholesale and clears the history.
    ///
    /// If `player` cannot move the turn passes to the opponent; if neither side
    /// can move the game is over.
    pub fn load_position(&mut self, board: Board, player: Player) {
        self.board = board;
        self.current_player = player;
        self.phase = Phase::InProgress;
        self.history.clear();

        if !self.board.has_legal_move(player) {
            if self.board.has_legal_move(player.opponent()) {
                self.current_player = player.opponent();
            } else {
                self.phase = Phase::Terminal;
            }
        }
        info!(player = ?self.current_player, phase = ?self.phase, "position loaded");
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Terminal
    }

    /// The result, once the game is over.
    pub fn winner(&self) -> Option<Winner> {
        if !self.is_terminal() {
            return None;
        }
        let (black, white) = self.board.count();
        Some(Winner::from_counts(black, white))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn state(&self) -> GameState {
        let (black, white) = self.board.count();
        GameState {
            board: self.board.to_rows(),
            black,
            white,
            player: self.current_player,
        }
    }

    /// Legal moves for the side to move, row-major. Empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_positions(self.current_player)
    }

    /// Whether `player` (default: the side to move) could play `pos` now.
    pub fn is_valid_move(&self, pos: Position, player: Option<Player>) -> bool {
        let player = player.unwrap_or(self.current_player);
        !self.is_terminal() && self.board.is_legal(player, pos)
    }

    /// Static evaluation of the live board from `player`'s view.
    pub fn score_board(&self, player: Player) -> i32 {
        heuristic::evaluate(&self.board, player)
    }

    fn apply_move(&mut self, pos: Position) -> EngineResult<u64> {
        if self.phase == Phase::Terminal {
            return Err(EngineError::GameOver);
        }

        let player = self.current_player;
        let mut next = self.board;
        let flips = next.apply(player, pos)?;

        self.history.push(self.snapshot());
        self.board = next;
        debug!(
            ?player,
            x = pos.x,
            y = pos.y,
            flipped = flips.count_ones(),
            "move applied"
        );
        self.advance_turn(player);

        Ok(flips)
    }

    fn advance_turn(&mut self, mover: Player) {
        let other = mover.opponent();
        if self.board.has_legal_move(other) {
            self.current_player = other;
        } else if self.board.has_legal_move(mover) {
            self.current_player = mover;
            debug!(passed = ?other, "no legal move, turn passes back");
        } else {
            self.current_player = other;
            self.phase = Phase::Terminal;
            let (black, white) = self.board.count();
            info!(black, white, "game over");
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            player: self.current_player,
            phase: self.phase,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}
