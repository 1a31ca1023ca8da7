//! Computer player: a positional evaluator and a depth-limited search over it.

pub mod heuristic;
pub mod search;

pub use search::{SearchStats, Searcher};
