//! Puzzle configuration types.
//!
//! - `Difficulty`: scales board size linearly
//! - `GeneratorConfig`: the constants the generator samples with
//! - `SolveRules`: how strictly a submission is checked
//!
//! All of these are plain serde types so a caller can load them from its own
//! configuration source.

use serde::{Deserialize, Serialize};

use super::{PuzzleError, Result};

/// Puzzle difficulty. The discriminant is the linear scale factor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Difficulty {
    #[default]
    Easy = 1,
    Medium = 2,
    Hard = 3,
    VeryHard = 4,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::VeryHard,
    ];

    /// Scale factor (1-4).
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// Look up a difficulty by its scale factor.
    ///
    /// ```
    /// use map_steps::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_level(3), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_level(0), None);
    /// ```
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            4 => Some(Difficulty::VeryHard),
            _ => None,
        }
    }
}

/// Match generation parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Board side length at `Easy`. Multiplied by the difficulty level.
    pub size_base: i32,

    /// Magnitude pool size before the multiplier.
    pub sequence_base: usize,

    /// Forbidden tile count before the multiplier.
    pub forbidden_base: usize,

    /// Multiplier applied to `sequence_base` and `forbidden_base`.
    /// Independent of difficulty.
    pub difficulty_multiplier: usize,

    /// Magnitudes are drawn from `0..magnitude_limit`.
    pub magnitude_limit: i32,

    /// Random steps the exit search may take before giving up on an attempt.
    pub tries_per_attempt: u32,

    /// Full resamples (start, pool, forbidden tiles) before generation fails.
    pub max_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size_base: 10,
            sequence_base: 5,
            forbidden_base: 2,
            difficulty_multiplier: 2,
            magnitude_limit: 10,
            tries_per_attempt: 100,
            max_attempts: 1000,
        }
    }
}

impl GeneratorConfig {
    /// Side length of the square board for `difficulty`.
    ///
    /// Call [`GeneratorConfig::validate`] first; an oversized `size_base`
    /// overflows here.
    #[must_use]
    pub fn board_size(&self, difficulty: Difficulty) -> i32 {
        self.size_base * i32::from(difficulty.level())
    }

    /// Number of magnitudes every match is assigned.
    #[must_use]
    pub fn magnitude_count(&self) -> usize {
        self.sequence_base * self.difficulty_multiplier
    }

    /// Number of forbidden tiles sampled per match.
    #[must_use]
    pub fn forbidden_count(&self) -> usize {
        self.forbidden_base * self.difficulty_multiplier
    }

    /// Check that every sampling range is non-empty and generation can run.
    ///
    /// Board sizes for every difficulty and both pool sizes must fit their
    /// integer types; the unchecked accessors rely on that.
    pub fn validate(&self) -> Result<()> {
        let sizes_fit = Difficulty::ALL
            .iter()
            .all(|d| self.size_base.checked_mul(i32::from(d.level())).is_some());
        let counts_fit = self.sequence_base.checked_mul(self.difficulty_multiplier).is_some()
            && self.forbidden_base.checked_mul(self.difficulty_multiplier).is_some();

        let reason = if self.size_base <= 0 {
            "size_base must be positive"
        } else if !sizes_fit {
            "size_base overflows the board size at some difficulty"
        } else if !counts_fit {
            "magnitude or forbidden count overflows"
        } else if self.magnitude_limit <= 0 {
            "magnitude_limit must be positive"
        } else if self.max_attempts == 0 {
            "max_attempts must be at least 1"
        } else {
            return Ok(());
        };
        Err(PuzzleError::InvalidConfig { reason })
    }

    /// Set the base board size.
    #[must_use]
    pub fn with_size_base(mut self, size: i32) -> Self {
        self.size_base = size;
        self
    }

    /// Set the magnitude pool size directly (multiplier becomes 1 for it).
    #[must_use]
    pub fn with_magnitude_count(mut self, count: usize) -> Self {
        self.sequence_base = count;
        self.forbidden_base = self.forbidden_base.saturating_mul(self.difficulty_multiplier);
        self.difficulty_multiplier = 1;
        self
    }

    /// Set the forbidden tile count directly.
    #[must_use]
    pub fn with_forbidden_count(mut self, count: usize) -> Self {
        self.sequence_base = self.sequence_base.saturating_mul(self.difficulty_multiplier);
        self.forbidden_base = count;
        self.difficulty_multiplier = 1;
        self
    }

    /// Set the exclusive upper bound for sampled magnitudes.
    #[must_use]
    pub fn with_magnitude_limit(mut self, limit: i32) -> Self {
        self.magnitude_limit = limit;
        self
    }

    /// Set the per-attempt step budget of the exit search.
    #[must_use]
    pub fn with_tries_per_attempt(mut self, tries: u32) -> Self {
        self.tries_per_attempt = tries;
        self
    }

    /// Set the outer retry cap.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }
}

/// Submission checking rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRules {
    /// Reject submissions whose magnitudes are not exactly the match's
    /// assigned multiset. Off by default: any magnitudes are replayed.
    pub strict_magnitudes: bool,
}

impl SolveRules {
    /// Rules that require the assigned magnitudes to be used exactly once each.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            strict_magnitudes: true,
        }
    }
}
