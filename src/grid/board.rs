//! Board bounds and forbidden tiles.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Point, PuzzleError, Result};

/// A rectangular board with impassable tiles.
///
/// Valid tiles satisfy `0 <= x < width`, `0 <= y < height` and are not
/// forbidden. Forbidden points outside the board are kept but never matter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRecord")]
pub struct Grid {
    width: i32,
    height: i32,
    forbidden: FxHashSet<Point>,
}

#[derive(Deserialize)]
struct GridRecord {
    width: i32,
    height: i32,
    forbidden: FxHashSet<Point>,
}

impl TryFrom<GridRecord> for Grid {
    type Error = PuzzleError;

    fn try_from(record: GridRecord) -> Result<Self> {
        Ok(Grid::new(record.width, record.height)?.with_forbidden(record.forbidden))
    }
}

impl Grid {
    /// Create an empty board. Both dimensions must be positive.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(PuzzleError::EmptyBoard { width, height });
        }
        Ok(Self {
            width,
            height,
            forbidden: FxHashSet::default(),
        })
    }

    /// Create an empty `size`x`size` board.
    pub fn square(size: i32) -> Result<Self> {
        Self::new(size, size)
    }

    /// Add forbidden tiles. Duplicates collapse.
    #[must_use]
    pub fn with_forbidden(mut self, points: impl IntoIterator<Item = Point>) -> Self {
        self.forbidden.extend(points);
        self
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// The forbidden tiles.
    #[must_use]
    pub fn forbidden(&self) -> &FxHashSet<Point> {
        &self.forbidden
    }

    /// Check if `p` lies on the board.
    ///
    /// ```
    /// use map_steps::core::Point;
    /// use map_steps::grid::Grid;
    ///
    /// let grid = Grid::square(10).unwrap();
    /// assert!(grid.in_bounds(Point::new(0, 9)));
    /// assert!(!grid.in_bounds(Point::new(10, 0)));
    /// assert!(!grid.in_bounds(Point::new(0, -1)));
    /// ```
    #[must_use]
    pub fn in_bounds(&self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    #[must_use]
    pub fn is_forbidden(&self, p: Point) -> bool {
        self.forbidden.contains(&p)
    }

    /// Check if `p` may be occupied: on the board and not forbidden.
    #[must_use]
    pub fn is_valid(&self, p: Point) -> bool {
        self.in_bounds(p) && !self.is_forbidden(p)
    }

    /// All board points, increasing `x` outer, increasing `y` inner.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_board() {
        assert_eq!(
            Grid::new(0, 5),
            Err(PuzzleError::EmptyBoard { width: 0, height: 5 })
        );
        assert!(Grid::new(5, -1).is_err());
        assert!(Grid::square(1).is_ok());
    }

    #[test]
    fn test_in_bounds_edges() {
        let grid = Grid::new(3, 2).unwrap();

        assert!(grid.in_bounds(Point::new(0, 0)));
        assert!(grid.in_bounds(Point::new(2, 1)));
        assert!(!grid.in_bounds(Point::new(3, 1)));
        assert!(!grid.in_bounds(Point::new(2, 2)));
        assert!(!grid.in_bounds(Point::new(-1, 0)));
    }

    #[test]
    fn test_forbidden_is_invalid() {
        let grid = Grid::square(5)
            .unwrap()
            .with_forbidden([Point::new(1, 1), Point::new(1, 1), Point::new(2, 3)]);

        assert_eq!(grid.forbidden().len(), 2);
        assert!(grid.in_bounds(Point::new(1, 1)));
        assert!(!grid.is_valid(Point::new(1, 1)));
        assert!(!grid.is_valid(Point::new(2, 3)));
        assert!(grid.is_valid(Point::new(3, 2)));
    }

    #[test]
    fn test_out_of_bounds_forbidden_is_harmless() {
        let grid = Grid::square(5).unwrap().with_forbidden([Point::new(9, 9)]);
        assert!(grid.is_forbidden(Point::new(9, 9)));
        assert!(grid.points().all(|p| grid.is_valid(p)));
    }

    #[test]
    fn test_points_order() {
        let grid = Grid::new(2, 3).unwrap();
        let points: Vec<_> = grid.points().collect();

        assert_eq!(points.len(), 6);
        assert_eq!(points[0], Point::new(0, 0));
        assert_eq!(points[1], Point::new(0, 1));
        assert_eq!(points[3], Point::new(1, 0));
        assert_eq!(points[5], Point::new(1, 2));
    }

    #[test]
    fn test_deserialize_checks_dimensions() {
        let grid = Grid::new(4, 3).unwrap().with_forbidden([Point::new(1, 2)]);
        let mut value = serde_json::to_value(&grid).unwrap();
        assert_eq!(serde_json::from_value::<Grid>(value.clone()).unwrap(), grid);

        value["width"] = serde_json::json!(0);
        let err = serde_json::from_value::<Grid>(value).unwrap_err();
        assert!(err.to_string().contains("positive dimensions"), "{err}");
    }
}
