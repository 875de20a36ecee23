//! # map-steps
//!
//! Grid path puzzles: reach the exit tile using a fixed multiset of move
//! magnitudes, choosing a direction for each.
//!
//! ## Design Principles
//!
//! 1. **Solvable by construction**: The generator walks a random path with
//!    the assigned magnitudes and puts the exit where the walk ends.
//!
//! 2. **Injected randomness**: Every generator call takes a `PuzzleRng`.
//!    Same seed, same match.
//!
//! 3. **Caller-owned state**: No globals. Matches live wherever the caller
//!    keeps them, typically a `MatchStore`.
//!
//! ## Modules
//!
//! - `core`: Points, directions, moves, RNG, configuration, errors
//! - `grid`: Board bounds and forbidden tiles
//! - `puzzle`: Match replay/validation and match generation
//! - `render`: Tile glyphs and the display model
//! - `session`: Raw-code entry points and the match store
//!
//! ## Example
//!
//! ```
//! use map_steps::{Difficulty, MatchGenerator, MatchStore, PuzzleRng, SolveRules};
//!
//! let generator = MatchGenerator::default();
//! let mut rng = PuzzleRng::new(42);
//! let mut store = MatchStore::with_generated(4, Difficulty::Easy, &generator, &mut rng).unwrap();
//!
//! let handle = store.handles().next().unwrap();
//! let shown = store.display(handle);
//! assert_eq!(shown.map.len(), 10);
//!
//! // Direction code 0 is never accepted.
//! let outcome = store.attempt(handle, &[(3, 0)], SolveRules::default()).unwrap();
//! assert!(!outcome.solved);
//! ```

pub mod core;
pub mod grid;
pub mod puzzle;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, Direction, GeneratorConfig, MatchHandle, Move, Point, PuzzleError, PuzzleRng, Result,
    SolveRules,
};

pub use crate::grid::Grid;

pub use crate::puzzle::{apply_move, GeneratedPath, Match, MatchGenerator};

pub use crate::render::{render_map, tile_at, DisplayModel, Tile};

pub use crate::session::{attempt, display, generate, parse_moves, AttemptOutcome, MatchStore};
