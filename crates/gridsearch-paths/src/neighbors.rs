use gridsearch_core::Point;

/// Candidate moves, applied to a state in this order: north, then clockwise
/// round the eight surrounding cells. Children are generated in this order,
/// so it also fixes every tie-break.
pub const OPERATORS: [Point; 8] = [
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
    Point::new(0, 1),
    Point::new(-1, 1),
    Point::new(-1, 0),
    Point::new(-1, -1),
];

/// The king-move successors of `p`, in operator order, unfiltered. Moves
/// that would leave the `i32` coordinate space are skipped.
#[inline]
pub(crate) fn successors(p: Point) -> impl Iterator<Item = Point> {
    OPERATORS
        .into_iter()
        .filter_map(move |d| Some(Point::new(p.x.checked_add(d.x)?, p.y.checked_add(d.y)?)))
}
