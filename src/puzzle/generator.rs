//! Randomized constructive match generation.
//!
//! ## Algorithm
//!
//! Each attempt samples, in order:
//! 1. `start`, uniform over the board
//! 2. the magnitude pool, uniform over `0..magnitude_limit`
//! 3. the forbidden tiles, each uniform over the board
//!
//! and then walks a random path from `start`: pick a cardinal direction and a
//! magnitude still in the pool, keep the step if it lands on a valid tile.
//! When the pool is used up the walk's end is the exit. The walk itself is a
//! witness solution, so every generated match is solvable.
//!
//! A walk gets `tries_per_attempt` steps and succeeds only if some are left
//! over once the pool is empty. An attempt that runs out of steps,
//! or whose forbidden tiles cover `start`, is thrown away and generation
//! starts over from fresh samples, at most `max_attempts` times.

use smallvec::SmallVec;
use tracing::{debug, warn};

use super::state::{apply_move, Match};
use crate::core::{Difficulty, Direction, GeneratorConfig, Move, Point, PuzzleError, PuzzleRng, Result};
use crate::grid::Grid;

/// The walk that produced a match's exit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedPath {
    /// Where the walk ended.
    pub exit: Point,
    /// Accepted steps, in order. Uses every pooled magnitude exactly once.
    pub moves: Vec<Move>,
}

/// Builds matches from a [`GeneratorConfig`].
#[derive(Clone, Debug, Default)]
pub struct MatchGenerator {
    config: GeneratorConfig,
}

impl MatchGenerator {
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a match at `difficulty`.
    ///
    /// Fails with [`PuzzleError::GenerationExhausted`] once `max_attempts`
    /// attempts have failed.
    ///
    /// ```
    /// use map_steps::core::{Difficulty, PuzzleRng};
    /// use map_steps::puzzle::MatchGenerator;
    ///
    /// let generator = MatchGenerator::default();
    /// let m = generator.generate(Difficulty::Easy, &mut PuzzleRng::new(7)).unwrap();
    ///
    /// assert_eq!(m.grid().width(), 10);
    /// assert_eq!(m.allowed_magnitudes().len(), 10);
    /// assert!(m.is_valid(m.start()) && m.is_valid(m.exit()));
    /// ```
    pub fn generate(&self, difficulty: Difficulty, rng: &mut PuzzleRng) -> Result<Match> {
        self.generate_with_path(difficulty, rng).map(|(m, _)| m)
    }

    /// Like [`MatchGenerator::generate`], also returning the witness path.
    pub fn generate_with_path(
        &self,
        difficulty: Difficulty,
        rng: &mut PuzzleRng,
    ) -> Result<(Match, GeneratedPath)> {
        self.config.validate()?;

        for attempt in 1..=self.config.max_attempts {
            if let Some(generated) = self.try_attempt(difficulty, rng)? {
                debug!(
                    attempt,
                    ?difficulty,
                    start = %generated.0.start(),
                    exit = %generated.0.exit(),
                    "generated match"
                );
                return Ok(generated);
            }
            debug!(attempt, "generation attempt failed, resampling");
        }

        warn!(
            attempts = self.config.max_attempts,
            ?difficulty,
            "match generation exhausted its attempts"
        );
        Err(PuzzleError::GenerationExhausted {
            attempts: self.config.max_attempts,
        })
    }

    /// One attempt: fresh samples and one exit search.
    ///
    /// `Ok(None)` means this attempt failed and the caller should retry.
    pub fn try_attempt(
        &self,
        difficulty: Difficulty,
        rng: &mut PuzzleRng,
    ) -> Result<Option<(Match, GeneratedPath)>> {
        let size = self.config.board_size(difficulty);

        let start = random_point(size, rng);
        let magnitudes: Vec<i32> = (0..self.config.magnitude_count())
            .map(|_| rng.gen_range(0..self.config.magnitude_limit))
            .collect();
        let forbidden: Vec<Point> = (0..self.config.forbidden_count())
            .map(|_| random_point(size, rng))
            .collect();

        let grid = Grid::square(size)?.with_forbidden(forbidden);
        if grid.is_forbidden(start) {
            debug!(%start, "start sampled onto a forbidden tile");
            return Ok(None);
        }

        let Some(path) = self.find_exit(&grid, start, &magnitudes, rng) else {
            return Ok(None);
        };

        let m = Match::new(grid, start, path.exit, magnitudes)?;
        Ok(Some((m, path)))
    }

    /// Walk from `start` until every magnitude is consumed.
    ///
    /// Returns `None` unless the pool is used up with at least one of the
    /// `tries_per_attempt` steps to spare.
    pub fn find_exit(
        &self,
        grid: &Grid,
        start: Point,
        magnitudes: &[i32],
        rng: &mut PuzzleRng,
    ) -> Option<GeneratedPath> {
        let mut moves_left: SmallVec<[i32; 16]> = SmallVec::from_slice(magnitudes);
        let mut moves = Vec::with_capacity(magnitudes.len());
        let mut current = start;
        let mut tries = self.config.tries_per_attempt;

        while !moves_left.is_empty() && tries > 0 {
            tries -= 1;

            let direction = Direction::CARDINALS[rng.gen_index(Direction::CARDINALS.len())];
            let index = rng.gen_index(moves_left.len());
            let magnitude = moves_left[index];

            let candidate = apply_move(current, magnitude, direction);
            if grid.is_valid(candidate) {
                current = candidate;
                moves_left.remove(index);
                moves.push(Move::new(magnitude, direction));
            }
        }

        // A pool emptied on the very last try still counts as running out.
        if tries == 0 {
            debug!(
                remaining = moves_left.len(),
                tries = self.config.tries_per_attempt,
                "exit search ran out of tries"
            );
            return None;
        }

        Some(GeneratedPath {
            exit: current,
            moves,
        })
    }
}

fn random_point(size: i32, rng: &mut PuzzleRng) -> Point {
    let x = rng.gen_range(0..size);
    let y = rng.gen_range(0..size);
    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_match_respects_config() {
        let generator = MatchGenerator::default();
        let mut rng = PuzzleRng::new(42);

        for difficulty in Difficulty::ALL {
            let m = generator.generate(difficulty, &mut rng).unwrap();
            let size = 10 * i32::from(difficulty.level());

            assert_eq!(m.grid().width(), size);
            assert_eq!(m.grid().height(), size);
            assert_eq!(m.allowed_magnitudes().len(), 10);
            assert!(m.allowed_magnitudes().iter().all(|&v| (0..10).contains(&v)));
            assert!(m.grid().forbidden().len() <= 4);
            assert!(m.grid().forbidden().iter().all(|p| m.grid().in_bounds(*p)));
        }
    }

    #[test]
    fn test_witness_path_solves_match() {
        let generator = MatchGenerator::default();
        let mut rng = PuzzleRng::new(11);

        let (mut m, path) = generator.generate_with_path(Difficulty::Medium, &mut rng).unwrap();

        assert_eq!(path.exit, m.exit());
        assert!(m.uses_allowed_magnitudes(&path.moves));
        assert!(m.try_solve(&path.moves));
    }

    #[test]
    fn test_find_exit_single_magnitude() {
        let generator = MatchGenerator::default();
        let grid = Grid::square(10).unwrap();
        let mut rng = PuzzleRng::new(5);

        let path = generator
            .find_exit(&grid, Point::new(0, 0), &[3], &mut rng)
            .unwrap();

        assert_eq!(path.moves.len(), 1);
        assert!(path.exit == Point::new(3, 0) || path.exit == Point::new(0, 3));
    }

    #[test]
    fn test_find_exit_empty_pool_stays_put() {
        let generator = MatchGenerator::default();
        let grid = Grid::square(10).unwrap();
        let mut rng = PuzzleRng::new(5);

        let path = generator
            .find_exit(&grid, Point::new(4, 4), &[], &mut rng)
            .unwrap();

        assert_eq!(path.exit, Point::new(4, 4));
        assert!(path.moves.is_empty());
    }

    #[test]
    fn test_find_exit_needs_a_spare_try() {
        let grid = Grid::square(10).unwrap();

        // A zero magnitude always lands, so the pool empties on the only try.
        let tight = MatchGenerator::new(GeneratorConfig::default().with_tries_per_attempt(1));
        let found = tight.find_exit(&grid, Point::new(2, 2), &[0], &mut PuzzleRng::new(5));
        assert!(found.is_none());

        let roomy = MatchGenerator::new(GeneratorConfig::default().with_tries_per_attempt(2));
        let found = roomy
            .find_exit(&grid, Point::new(2, 2), &[0], &mut PuzzleRng::new(5))
            .unwrap();
        assert_eq!(found.exit, Point::new(2, 2));
        assert_eq!(found.moves.len(), 1);
    }

    #[test]
    fn test_find_exit_gives_up_when_boxed_in() {
        let generator = MatchGenerator::new(GeneratorConfig::default().with_tries_per_attempt(50));
        let grid = Grid::square(3).unwrap().with_forbidden([
            Point::new(0, 1),
            Point::new(1, 0),
        ]);
        let mut rng = PuzzleRng::new(5);

        assert!(generator
            .find_exit(&grid, Point::new(0, 0), &[1], &mut rng)
            .is_none());
    }

    #[test]
    fn test_zero_magnitudes_always_fit() {
        let generator = MatchGenerator::new(
            GeneratorConfig::default()
                .with_size_base(1)
                .with_forbidden_count(0)
                .with_magnitude_limit(1)
                .with_max_attempts(1),
        );
        let mut rng = PuzzleRng::new(1);

        let m = generator.generate(Difficulty::Easy, &mut rng).unwrap();
        assert_eq!(m.start(), Point::ORIGIN);
        assert_eq!(m.exit(), Point::ORIGIN);
    }

    #[test]
    fn test_exhausted_attempts_is_an_error() {
        let generator = MatchGenerator::new(
            GeneratorConfig::default()
                .with_tries_per_attempt(0)
                .with_max_attempts(3),
        );
        let mut rng = PuzzleRng::new(1);

        assert_eq!(
            generator.generate(Difficulty::Easy, &mut rng),
            Err(PuzzleError::GenerationExhausted { attempts: 3 })
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let generator = MatchGenerator::new(GeneratorConfig::default().with_magnitude_limit(0));
        let mut rng = PuzzleRng::new(1);

        assert!(matches!(
            generator.generate(Difficulty::Easy, &mut rng),
            Err(PuzzleError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_same_seed_same_match() {
        let generator = MatchGenerator::default();

        let a = generator.generate(Difficulty::Hard, &mut PuzzleRng::new(99)).unwrap();
        let b = generator.generate(Difficulty::Hard, &mut PuzzleRng::new(99)).unwrap();

        assert_eq!(a, b);
    }
}
