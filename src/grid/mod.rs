//! Grid model: board dimensions and the in-bounds / forbidden tests.
//!
//! Pure predicates, no side effects. Matches and the generator both ask the
//! grid whether a tile may be occupied.

mod board;

pub use board::Grid;
