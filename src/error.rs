//! Error types for engine commands and the position blob format.

use thiserror::Error;

/// Reasons an engine command is rejected. None of these leave the live game
/// partially mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("illegal move at ({x}, {y})")]
    IllegalMove { x: u8, y: u8 },

    #[error("coordinates ({x}, {y}) are off the board")]
    OutOfRange { x: i32, y: i32 },

    #[error("game is already over")]
    GameOver,

    #[error("no move to undo")]
    HistoryUnderflow,

    #[error("side to move has no legal moves")]
    NoLegalMove,

    #[error("malformed state: {0}")]
    MalformedState(String),
}

/// Failures while decoding an exported position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("position data too short: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("invalid position magic (expected OTHP)")]
    BadMagic,

    #[error("unsupported position version: expected {expected}, got {actual}")]
    UnsupportedVersion { expected: u32, actual: u32 },

    #[error("CRC32 mismatch: expected {expected:#010x}, got {actual:#010x}")]
    CrcMismatch { expected: u32, actual: u32 },

    #[error("position payload has trailing bytes")]
    TrailingBytes,

    #[error("invalid cell code {code} at square {square}")]
    InvalidCell { square: usize, code: u8 },

    #[error("invalid side-to-move code {0}")]
    InvalidPlayer(u8),
}

pub type EngineResult<T> = Result<T, EngineError>;
