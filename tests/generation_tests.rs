//! Match generation tests.

use std::collections::HashSet;

use map_steps::core::{Difficulty, GeneratorConfig, Point, PuzzleError, PuzzleRng};
use map_steps::puzzle::MatchGenerator;

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_identical_match() {
    let generator = MatchGenerator::default();

    for difficulty in Difficulty::ALL {
        let a = generator.generate(difficulty, &mut PuzzleRng::new(1234)).unwrap();
        let b = generator.generate(difficulty, &mut PuzzleRng::new(1234)).unwrap();

        assert_eq!(a.start(), b.start());
        assert_eq!(a.exit(), b.exit());
        assert_eq!(a.allowed_magnitudes(), b.allowed_magnitudes());
        assert_eq!(a.grid().forbidden(), b.grid().forbidden());
    }
}

#[test]
fn test_different_seeds_vary() {
    let generator = MatchGenerator::default();
    let starts: HashSet<Point> = (0..20)
        .map(|seed| generator.generate(Difficulty::Easy, &mut PuzzleRng::new(seed)).unwrap())
        .map(|m| m.start())
        .collect();

    assert!(starts.len() > 1);
}

// =============================================================================
// Invariants
// =============================================================================

#[test]
fn test_generated_matches_are_solvable() {
    let generator = MatchGenerator::default();
    let mut rng = PuzzleRng::new(2024);

    for difficulty in Difficulty::ALL {
        for _ in 0..25 {
            let (mut m, path) = generator.generate_with_path(difficulty, &mut rng).unwrap();

            assert!(m.is_valid(m.start()), "start must be a valid tile");
            assert!(m.is_valid(m.exit()), "exit must be a valid tile");
            assert!(m.uses_allowed_magnitudes(&path.moves));
            assert!(path.moves.iter().all(|mv| mv.direction.is_cardinal()));
            assert!(m.try_solve(&path.moves), "witness path must reach the exit");
        }
    }
}

#[test]
fn test_magnitudes_within_limit() {
    let generator = MatchGenerator::default();
    let mut rng = PuzzleRng::new(8);

    for _ in 0..50 {
        let m = generator.generate(Difficulty::VeryHard, &mut rng).unwrap();
        assert_eq!(m.allowed_magnitudes().len(), 10);
        assert!(m.allowed_magnitudes().iter().all(|v| (0..10).contains(v)));
    }
}

#[test]
fn test_custom_config() {
    let generator = MatchGenerator::new(
        GeneratorConfig::default()
            .with_size_base(6)
            .with_magnitude_count(3)
            .with_forbidden_count(1)
            .with_magnitude_limit(4),
    );
    let mut rng = PuzzleRng::new(77);

    let m = generator.generate(Difficulty::Medium, &mut rng).unwrap();
    assert_eq!(m.grid().width(), 12);
    assert_eq!(m.allowed_magnitudes().len(), 3);
    assert!(m.grid().forbidden().len() <= 1);
    assert!(m.allowed_magnitudes().iter().all(|v| (0..4).contains(v)));
}

// =============================================================================
// Failure modes
// =============================================================================

#[test]
fn test_retry_cap_is_enforced() {
    let generator = MatchGenerator::new(
        GeneratorConfig::default()
            .with_tries_per_attempt(0)
            .with_max_attempts(10),
    );

    let err = generator
        .generate(Difficulty::Easy, &mut PuzzleRng::new(3))
        .unwrap_err();
    assert_eq!(err, PuzzleError::GenerationExhausted { attempts: 10 });
    assert_eq!(
        err.to_string(),
        "no reachable exit found after 10 generation attempts"
    );
}

#[test]
fn test_impossible_board_fails_closed() {
    // On a 1x1 board only a magnitude of 0 fits.
    let generator = MatchGenerator::new(
        GeneratorConfig::default()
            .with_size_base(1)
            .with_forbidden_count(0)
            .with_magnitude_count(1)
            .with_max_attempts(20),
    );
    let mut rng = PuzzleRng::new(9);

    let result = generator.generate(Difficulty::Easy, &mut rng);
    // Either some attempt drew a 0 or the cap was hit. Never a hang.
    match result {
        Ok(m) => {
            assert_eq!(m.allowed_magnitudes(), &[0]);
            assert_eq!(m.exit(), Point::ORIGIN);
        }
        Err(err) => assert_eq!(err, PuzzleError::GenerationExhausted { attempts: 20 }),
    }
}

#[test]
fn test_oversized_board_is_a_config_error() {
    let generator = MatchGenerator::new(GeneratorConfig::default().with_size_base(i32::MAX / 2));

    let err = generator
        .generate(Difficulty::VeryHard, &mut PuzzleRng::new(1))
        .unwrap_err();
    assert!(matches!(err, PuzzleError::InvalidConfig { .. }));
}
