use thiserror::Error;

use super::{MatchHandle, Point};

/// Errors raised by puzzle construction, generation and match lookup.
///
/// Illegal moves during a replay are not errors; they end the replay with a
/// `false` result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("no reachable exit found after {attempts} generation attempts")]
    GenerationExhausted { attempts: u32 },

    #[error("start {0} is out of bounds or forbidden")]
    InvalidStart(Point),

    #[error("exit {0} is out of bounds or forbidden")]
    InvalidExit(Point),

    #[error("board must have positive dimensions, got {width}x{height}")]
    EmptyBoard { width: i32, height: i32 },

    #[error("invalid generator config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("unknown match: {0}")]
    UnknownMatch(MatchHandle),

    #[error("match store is full, index {index} does not fit a handle")]
    StoreFull { index: usize },
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
