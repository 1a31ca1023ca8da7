use std::time::Duration;

use tracing::debug;
use web_time::Instant;

use crate::ai::heuristic::evaluate;
use crate::board::{Board, mask_to_positions};
use crate::types::{Player, Position};

// Symmetric bounds so negation never overflows.
const MIN_SCORE: i32 = -i32::MAX;
const MAX_SCORE: i32 = i32::MAX;

/// Counters from the most recent [`Searcher::best_move`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Depth-limited negamax with alpha-beta pruning.
///
/// The search only ever touches its own board copies, so the same position
/// and depth always produce the same move. Ties go to the first move in
/// row-major order (`y * 8 + x`).
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    parallel_root: bool,
    stats: SearchStats,
}

impl Searcher {
    #[cfg(test)]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Scores root moves concurrently when the `parallel` feature is enabled.
    /// Without the feature this falls back to the sequential search.
    pub fn with_parallel_root(parallel_root: bool) -> Self {
        Self {
            parallel_root,
            stats: SearchStats::default(),
        }
    }

    /// Returns the best move for `player`, or `None` when it has no legal move
    /// (the caller passes instead). A depth of 0 is treated as 1.
    pub fn best_move(&mut self, board: &Board, player: Player, depth: u8) -> Option<Position> {
        let start_time = Instant::now();
        let depth = depth.max(1);

        let moves = board.legal_positions(player);
        if moves.is_empty() {
            self.stats = SearchStats::default();
            return None;
        }

        let (best_move, best_score, nodes) = if self.parallel_root && moves.len() > 1 {
            search_root_parallel(board, player, &moves, depth)
        } else {
            search_root(board, player, &moves, depth)
        };

        self.stats = SearchStats {
            nodes,
            elapsed: start_time.elapsed(),
        };
        debug!(
            ?player,
            depth,
            x = best_move.x,
            y = best_move.y,
            score = best_score,
            nodes,
            elapsed_us = self.stats.elapsed.as_micros() as u64,
            "search finished"
        );

        Some(best_move)
    }

    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }
}

fn search_root(
    board: &Board,
    player: Player,
    moves: &[Position],
    depth: u8,
) -> (Position, i32, u64) {
    let mut nodes = 1u64;
    let mut best_move = moves[0];
    let mut best_score = MIN_SCORE;
    let mut alpha = MIN_SCORE;

    for &mv in moves {
        let mut next = *board;
        if next.apply(player, mv).is_err() {
            continue;
        }
        let score = -negaalpha(
            &next,
            player.opponent(),
            depth - 1,
            -MAX_SCORE,
            -alpha,
            &mut nodes,
        );
        // Strictly greater keeps the earliest move on ties.
        if score > best_score {
            best_score = score;
            best_move = mv;
        }
        alpha = alpha.max(score);
    }

    (best_move, best_score, nodes)
}

#[cfg(feature = "parallel")]
fn search_root_parallel(
    board: &Board,
    player: Player,
    moves: &[Position],
    depth: u8,
) -> (Position, i32, u64) {
    use rayon::prelude::*;

    // Full window per root move: every score is exact, so picking the first
    // maximum matches the sequential result.
    let scored: Vec<(Position, i32, u64)> = moves
        .par_iter()
        .map(|&mv| {
            let mut nodes = 0u64;
            let mut next = *board;
            let score = match next.apply(player, mv) {
                Ok(_) => -negaalpha(
                    &next,
                    player.opponent(),
                    depth - 1,
                    MIN_SCORE,
                    MAX_SCORE,
                    &mut nodes,
                ),
                Err(_) => MIN_SCORE,
            };
            (mv, score, nodes)
        })
        .collect();

    let mut best = (moves[0], MIN_SCORE);
    let mut nodes = 1u64;
    for (mv, score, branch_nodes) in scored {
        nodes += branch_nodes;
        if score > best.1 {
            best = (mv, score);
        }
    }

    (best.0, best.1, nodes)
}

#[cfg(not(feature = "parallel"))]
fn search_root_parallel(
    board: &Board,
    player: Player,
    moves: &[Position],
    depth: u8,
) -> (Position, i32, u64) {
    search_root(board, player, moves, depth)
}

/// Fail-soft negamax. Scores are from `player`'s perspective.
fn negaalpha(
    board: &Board,
    player: Player,
    depth: u8,
    alpha: i32,
    beta: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return evaluate(board, player);
    }

    let legal = board.legal_moves(player);
    if legal == 0 {
        if !board.has_legal_move(player.opponent()) {
            return evaluate(board, player);
        }
        // A pass uses up a ply; the opponent acts next.
        return -negaalpha(board, player.opponent(), depth - 1, -beta, -alpha, nodes);
    }

    let mut best_score = MIN_SCORE;
    let mut alpha = alpha;

    for mv in mask_to_positions(legal) {
        let mut next = *board;
        if next.apply(player, mv).is_err() {
            continue;
        }
        let score = -negaalpha(&next, player.opponent(), depth - 1, -beta, -alpha, nodes);
        if score > best_score {
            best_score = score;
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            break;
        }
    }

    best_score
}
