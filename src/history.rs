//! Undo history for the live game.
//!
//! Every applied move pushes a [`Snapshot`] of the state as it was *before* the
//! move. Snapshots are plain copies and are never modified after being pushed;
//! `undo` pops the newest one and hands it back to the engine to restore.

use crate::board::Board;
use crate::game::Phase;
use crate::types::Player;

/// Immutable copy of the engine state taken before a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub player: Player,
    pub phase: Phase,
}

#[derive(Debug, Default, Clone)]
pub struct HistoryStack {
    snapshots: Vec<Snapshot>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Removes and returns the newest snapshot, or `None` when empty.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    #[cfg(test)]
    pub(crate) fn peek(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(player: Player) -> Snapshot {
        Snapshot {
            board: Board::new(),
            player,
            phase: Phase::InProgress,
        }
    }

    #[test]
    fn pop_returns_snapshots_newest_first() {
        let mut history = HistoryStack::new();
        history.push(snapshot(Player::Black));
        history.push(snapshot(Player::White));

        assert_eq!(history.len(), 2);
        assert_eq!(history.peek().map(|s| s.player), Some(Player::White));
        assert_eq!(history.pop().map(|s| s.player), Some(Player::White));
        assert_eq!(history.pop().map(|s| s.player), Some(Player::Black));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn pushed_snapshot_is_a_copy() {
        let mut history = HistoryStack::new();
        let mut live = snapshot(Player::Black);
        history.push(live);

        live.board = Board::empty();
        live.player = Player::White;

        assert_eq!(history.peek(), Some(&snapshot(Player::Black)));
    }

    #[test]
    fn clear_empties_the_stack() {
        let mut history = HistoryStack::new();
        history.push(snapshot(Player::Black));
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.pop(), None);
    }
}
