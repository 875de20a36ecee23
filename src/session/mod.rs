//! Collaborator-facing calls: generate, attempt, display.
//!
//! The request layer owns transport and serialization. It holds matches in a
//! [`MatchStore`] and calls into this module with raw move codes.

mod api;
mod store;

pub use api::{attempt, display, generate, parse_moves, AttemptOutcome};
pub use store::MatchStore;
pub use crate::core::MatchHandle;
