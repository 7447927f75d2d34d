use gridsearch_core::Point;

/// Chebyshev (L∞) distance between two points: the number of king-moves
/// between them on an open grid. Defined for any pair of coordinates.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y))
}

/// Euclidean (L2) straight-line distance between two points.
///
/// This is the A* heuristic. On an 8-connected grid with unit steps it can
/// exceed the true remaining move count (offset (3, 1): √10 > 3), so it is
/// not admissible everywhere.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(b.x) - f64::from(a.x);
    let dy = f64::from(b.y) - f64::from(a.y);
    (dx * dx + dy * dy).sqrt()
}
