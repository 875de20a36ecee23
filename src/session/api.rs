//! The entry points a request layer calls.
//!
//! Moves arrive as raw `(magnitude, direction_code)` pairs. Decoding fails
//! closed: one unrecognized code and nothing is replayed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Difficulty, Direction, Move, PuzzleRng, Result, SolveRules};
use crate::puzzle::{Match, MatchGenerator};
use crate::render::DisplayModel;

/// Result of one solution attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptOutcome {
    pub solved: bool,
    pub display: DisplayModel,
}

/// Decode raw moves. Returns `None` if any direction code is not in `1..=4`.
///
/// ```
/// use map_steps::core::{Direction, Move};
/// use map_steps::session::parse_moves;
///
/// assert_eq!(
///     parse_moves(&[(3, 2), (1, 1)]),
///     Some(vec![Move::new(3, Direction::Right), Move::new(1, Direction::Up)])
/// );
/// assert_eq!(parse_moves(&[(3, 2), (1, 0)]), None);
/// assert_eq!(parse_moves(&[(3, 5)]), None);
/// ```
#[must_use]
pub fn parse_moves(raw: &[(i32, i32)]) -> Option<Vec<Move>> {
    raw.iter()
        .map(|&(magnitude, code)| {
            let direction = Direction::from_code(code);
            direction
                .is_cardinal()
                .then_some(Move::new(magnitude, direction))
        })
        .collect()
}

/// Create a match at `difficulty`.
pub fn generate(generator: &MatchGenerator, difficulty: Difficulty, rng: &mut PuzzleRng) -> Result<Match> {
    generator.generate(difficulty, rng)
}

/// Attempt a raw solution against `m`.
///
/// Undecodable moves give an unsolved outcome without touching `m`.
pub fn attempt(m: &mut Match, raw: &[(i32, i32)], rules: SolveRules) -> AttemptOutcome {
    let solved = match parse_moves(raw) {
        Some(moves) => m.solve_with(&moves, rules),
        None => {
            debug!(moves = raw.len(), "refusing submission with an unknown direction code");
            false
        }
    };
    AttemptOutcome {
        solved,
        display: DisplayModel::of(m, solved),
    }
}

/// Current display of `m`.
#[must_use]
pub fn display(m: &Match) -> DisplayModel {
    DisplayModel::of(m, false)
}
