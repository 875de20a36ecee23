//! Puzzle matches: the replay/validation algorithm and the generator.
//!
//! - `Match`: one puzzle instance, mutated only by replays
//! - `MatchGenerator`: builds matches with a guaranteed-reachable exit

mod generator;
mod state;

pub use generator::{GeneratedPath, MatchGenerator};
pub use state::{apply_move, Match};
