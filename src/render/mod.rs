//! Map rendering: projects a match into rows of tile glyphs.

mod map;

pub use map::{render_map, tile_at, DisplayModel, Tile};
