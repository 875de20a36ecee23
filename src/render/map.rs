//! Tile glyphs and the display model.

use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::puzzle::Match;

/// What a single board tile shows.
///
/// Variants are listed in precedence order: when a point qualifies for
/// several, the first wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Forbidden,
    Start,
    Exit,
    LastAttempt,
    Empty,
}

impl Tile {
    /// Fixed three-character glyph.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Tile::Forbidden => "[x]",
            Tile::Start => "[s]",
            Tile::Exit => "[e]",
            Tile::LastAttempt => "[t]",
            Tile::Empty => "[ ]",
        }
    }
}

/// Classify `p` on `m`: forbidden > start > exit > last attempt > empty.
#[must_use]
pub fn tile_at(m: &Match, p: Point) -> Tile {
    if m.grid().is_forbidden(p) {
        Tile::Forbidden
    } else if p == m.start() {
        Tile::Start
    } else if p == m.exit() {
        Tile::Exit
    } else if p == m.last_attempt() {
        Tile::LastAttempt
    } else {
        Tile::Empty
    }
}

/// Render the board as one string per `x`, tiles ordered by increasing `y`.
#[must_use]
pub fn render_map(m: &Match) -> Vec<String> {
    let grid = m.grid();
    (0..grid.width())
        .map(|x| {
            (0..grid.height())
                .map(|y| tile_at(m, Point::new(x, y)).glyph())
                .collect::<String>()
        })
        .collect()
}

/// What the caller shows after a request.
///
/// `Default` is the empty model handed back for a match that does not exist.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayModel {
    pub victory: bool,
    pub allowed_magnitudes: Vec<i32>,
    pub map: Vec<String>,
}

impl DisplayModel {
    /// Project `m` into a display model.
    #[must_use]
    pub fn of(m: &Match, victory: bool) -> Self {
        Self {
            victory,
            allowed_magnitudes: m.allowed_magnitudes().to_vec(),
            map: render_map(m),
        }
    }
}
