//! Core puzzle types: points, directions, moves, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these value types.

pub mod point;
pub mod rng;
pub mod config;
pub mod error;
pub mod handle;

pub use point::{Direction, Move, Point};
pub use rng::PuzzleRng;
pub use config::{Difficulty, GeneratorConfig, SolveRules};
pub use error::{PuzzleError, Result};
pub use handle::MatchHandle;
