//! Caller-owned match storage.
//!
//! Matches live in an arena and are addressed by [`MatchHandle`]. The store
//! is plain data: whoever owns it decides when matches are created, rotated
//! or shared, and guards it if requests run concurrently.

use serde::{Deserialize, Serialize};

use super::api::{self, AttemptOutcome};
use crate::core::{Difficulty, MatchHandle, PuzzleError, PuzzleRng, Result, SolveRules};
use crate::puzzle::{Match, MatchGenerator};
use crate::render::DisplayModel;

/// Arena of matches.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MatchStore {
    matches: Vec<Match>,
}

impl MatchStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-generate `count` matches, each from its own fork of `rng`.
    pub fn with_generated(
        count: usize,
        difficulty: Difficulty,
        generator: &MatchGenerator,
        rng: &mut PuzzleRng,
    ) -> Result<Self> {
        let mut store = Self::new();
        for _ in 0..count {
            let mut match_rng = rng.fork();
            store.insert(generator.generate(difficulty, &mut match_rng)?)?;
        }
        Ok(store)
    }

    /// Add a match, returning its handle.
    ///
    /// Fails with [`PuzzleError::StoreFull`] once the next index would not
    /// fit in a handle.
    pub fn insert(&mut self, m: Match) -> Result<MatchHandle> {
        let handle = MatchHandle::try_from(self.matches.len())?;
        self.matches.push(m);
        Ok(handle)
    }

    #[must_use]
    pub fn get(&self, handle: MatchHandle) -> Option<&Match> {
        self.matches.get(handle.index())
    }

    pub fn get_mut(&mut self, handle: MatchHandle) -> Option<&mut Match> {
        self.matches.get_mut(handle.index())
    }

    /// Swap in a fresh match under an existing handle, returning the old one.
    pub fn replace(&mut self, handle: MatchHandle, m: Match) -> Result<Match> {
        let slot = self
            .matches
            .get_mut(handle.index())
            .ok_or(PuzzleError::UnknownMatch(handle))?;
        Ok(std::mem::replace(slot, m))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// All live handles, in insertion order.
    pub fn handles(&self) -> impl Iterator<Item = MatchHandle> {
        (0..self.matches.len()).map_while(|index| MatchHandle::try_from(index).ok())
    }

    /// Display a match. Unknown handles get the empty model.
    #[must_use]
    pub fn display(&self, handle: MatchHandle) -> DisplayModel {
        self.get(handle).map(api::display).unwrap_or_default()
    }

    /// Attempt a raw solution against a stored match.
    pub fn attempt(
        &mut self,
        handle: MatchHandle,
        raw: &[(i32, i32)],
        rules: SolveRules,
    ) -> Result<AttemptOutcome> {
        let m = self
            .get_mut(handle)
            .ok_or(PuzzleError::UnknownMatch(handle))?;
        Ok(api::attempt(m, raw, rules))
    }
}
