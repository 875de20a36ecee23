//! Match state and solution replay.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Direction, Move, Point, PuzzleError, Result, SolveRules};
use crate::grid::Grid;

/// Translate `p` by `magnitude` tiles along `direction`.
///
/// `Direction::None` returns `p` unchanged. Never fails; validity is the
/// caller's question.
#[must_use]
pub fn apply_move(p: Point, magnitude: i32, direction: Direction) -> Point {
    p.step(magnitude, direction)
}

/// One generated puzzle.
///
/// ## Invariants
///
/// - `start` and `exit` are valid tiles of `grid`
/// - `allowed_magnitudes` never changes after construction
/// - Only a replay mutates the match, and only `last_attempt`
///
/// Deserialization goes through [`Match::new`], so a stored match with a
/// forbidden or off-board start or exit is rejected on load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatchRecord")]
pub struct Match {
    grid: Grid,
    start: Point,
    exit: Point,
    allowed_magnitudes: Vec<i32>,
    last_attempt: Point,
}

/// Wire shape of a [`Match`], checked on the way in.
#[derive(Deserialize)]
struct MatchRecord {
    grid: Grid,
    start: Point,
    exit: Point,
    allowed_magnitudes: Vec<i32>,
    last_attempt: Point,
}

impl TryFrom<MatchRecord> for Match {
    type Error = PuzzleError;

    fn try_from(record: MatchRecord) -> Result<Self> {
        let mut m = Match::new(record.grid, record.start, record.exit, record.allowed_magnitudes)?;
        m.last_attempt = record.last_attempt;
        Ok(m)
    }
}

impl Match {
    /// Create a match, checking that `start` and `exit` may be occupied.
    ///
    /// `last_attempt` starts at [`Point::ORIGIN`].
    pub fn new(grid: Grid, start: Point, exit: Point, allowed_magnitudes: Vec<i32>) -> Result<Self> {
        if !grid.is_valid(start) {
            return Err(PuzzleError::InvalidStart(start));
        }
        if !grid.is_valid(exit) {
            return Err(PuzzleError::InvalidExit(exit));
        }
        Ok(Self {
            grid,
            start,
            exit,
            allowed_magnitudes,
            last_attempt: Point::ORIGIN,
        })
    }

    /// Build a match without the start/exit checks.
    #[cfg(test)]
    pub(crate) fn new_unchecked(grid: Grid, start: Point, exit: Point) -> Self {
        Self {
            grid,
            start,
            exit,
            allowed_magnitudes: Vec::new(),
            last_attempt: Point::ORIGIN,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn start(&self) -> Point {
        self.start
    }

    #[must_use]
    pub const fn exit(&self) -> Point {
        self.exit
    }

    /// The magnitude multiset an intended solution consumes.
    #[must_use]
    pub fn allowed_magnitudes(&self) -> &[i32] {
        &self.allowed_magnitudes
    }

    /// Where the most recent replay stopped.
    #[must_use]
    pub const fn last_attempt(&self) -> Point {
        self.last_attempt
    }

    /// Check if `p` is on the board and not forbidden.
    #[must_use]
    pub fn is_valid(&self, p: Point) -> bool {
        self.grid.is_valid(p)
    }

    /// Replay `moves` from `start`.
    ///
    /// Stops at the first move that lands off the board or on a forbidden
    /// tile; that landing point becomes `last_attempt` and the result is
    /// `false`. Moves after it are never looked at. Otherwise the final
    /// point becomes `last_attempt` and the result is whether it is the exit.
    ///
    /// Magnitudes are not checked against `allowed_magnitudes`; use
    /// [`Match::solve_with`] for that.
    ///
    /// ```
    /// use map_steps::core::{Direction, Move, Point};
    /// use map_steps::grid::Grid;
    /// use map_steps::puzzle::Match;
    ///
    /// let grid = Grid::square(10).unwrap();
    /// let mut m = Match::new(grid, Point::new(0, 0), Point::new(3, 0), vec![3]).unwrap();
    ///
    /// assert!(m.try_solve(&[Move::new(3, Direction::Right)]));
    /// assert!(!m.try_solve(&[Move::new(4, Direction::Right)]));
    /// assert_eq!(m.last_attempt(), Point::new(4, 0));
    /// ```
    pub fn try_solve(&mut self, moves: &[Move]) -> bool {
        let mut current = self.start;

        for (step, mv) in moves.iter().enumerate() {
            current = apply_move(current, mv.magnitude, mv.direction);
            if !self.grid.is_valid(current) {
                trace!(step, landed = %current, "replay left valid tiles");
                self.last_attempt = current;
                return false;
            }
        }

        self.last_attempt = current;
        let solved = current == self.exit;
        trace!(end = %current, solved, "replay finished");
        solved
    }

    /// Check if `moves` use exactly the assigned magnitudes, each once.
    #[must_use]
    pub fn uses_allowed_magnitudes(&self, moves: &[Move]) -> bool {
        if moves.len() != self.allowed_magnitudes.len() {
            return false;
        }
        let mut submitted: Vec<i32> = moves.iter().map(|mv| mv.magnitude).collect();
        let mut allowed = self.allowed_magnitudes.clone();
        submitted.sort_unstable();
        allowed.sort_unstable();
        submitted == allowed
    }

    /// Replay `moves` under `rules`.
    ///
    /// With `strict_magnitudes`, a submission that does not use the assigned
    /// magnitudes is refused without replaying, leaving `last_attempt` as is.
    pub fn solve_with(&mut self, moves: &[Move], rules: SolveRules) -> bool {
        if rules.strict_magnitudes && !self.uses_allowed_magnitudes(moves) {
            debug!(submitted = moves.len(), "magnitudes do not match the assigned pool");
            return false;
        }
        self.try_solve(moves)
    }
}
