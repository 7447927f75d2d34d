use std::collections::HashSet;

use gridsearch_core::{Point, Range};

use crate::error::ProblemError;
use crate::neighbors::{OPERATORS, successors};

/// Immutable description of one search: grid size, endpoints and obstacles.
///
/// Construction does not validate anything. Searching a problem whose start
/// or goal is off the grid or on an obstacle has no specified result (the
/// engine terminates without panicking); call [`validate`](Self::validate)
/// first to reject such input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "ProblemRepr", into = "ProblemRepr")
)]
pub struct Problem {
    bounds: Range,
    width: i32,
    height: i32,
    start: Point,
    goal: Point,
    obstacles: HashSet<Point>,
}

impl Problem {
    /// Create a problem on a `width × height` grid.
    pub fn new(
        width: i32,
        height: i32,
        start: Point,
        goal: Point,
        obstacles: impl IntoIterator<Item = Point>,
    ) -> Self {
        Self {
            bounds: Range::sized(width, height),
            width,
            height,
            start,
            goal,
            obstacles: obstacles.into_iter().collect(),
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The cells of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Obstacle cells in row-major order.
    pub fn obstacles(&self) -> Vec<Point> {
        let mut v: Vec<Point> = self.obstacles.iter().copied().collect();
        v.sort_unstable();
        v
    }

    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.obstacles.contains(&p)
    }

    /// Whether `p` is on the grid and not an obstacle.
    #[inline]
    pub fn is_valid(&self, p: Point) -> bool {
        self.bounds.contains(p) && !self.obstacles.contains(&p)
    }

    #[inline]
    pub fn is_goal(&self, p: Point) -> bool {
        p == self.goal
    }

    /// The move offsets every strategy expands with, in generation order.
    #[inline]
    pub fn operators(&self) -> &'static [Point; 8] {
        &OPERATORS
    }

    /// Append the valid successors of `p` to `buf`, in operator order.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(successors(p).filter(|&n| self.is_valid(n)));
    }

    /// Check the conditions a front-end must guarantee before searching.
    pub fn validate(&self) -> Result<(), ProblemError> {
        if self.bounds.is_empty() {
            return Err(ProblemError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if !self.bounds.contains(self.start) {
            return Err(ProblemError::StartOutOfBounds(self.start));
        }
        if !self.bounds.contains(self.goal) {
            return Err(ProblemError::GoalOutOfBounds(self.goal));
        }
        if self.is_obstacle(self.start) {
            return Err(ProblemError::StartOnObstacle(self.start));
        }
        if self.is_obstacle(self.goal) {
            return Err(ProblemError::GoalOnObstacle(self.goal));
        }
        if self.start == self.goal {
            return Err(ProblemError::StartIsGoal(self.start));
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ProblemRepr {
    width: i32,
    height: i32,
    start: Point,
    goal: Point,
    obstacles: Vec<Point>,
}

#[cfg(feature = "serde")]
impl From<ProblemRepr> for Problem {
    fn from(r: ProblemRepr) -> Self {
        Problem::new(r.width, r.height, r.start, r.goal, r.obstacles)
    }
}

#[cfg(feature = "serde")]
impl From<Problem> for ProblemRepr {
    fn from(p: Problem) -> Self {
        ProblemRepr {
            width: p.width,
            height: p.height,
            start: p.start,
            goal: p.goal,
            obstacles: p.obstacles(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_WALLS: [Point; 0] = [];

    fn walled() -> Problem {
        let wall = [(4, 4), (4, 3), (4, 2), (4, 1)].map(Point::from);
        Problem::new(7, 5, Point::new(1, 2), Point::new(6, 2), wall)
    }

    #[test]
    fn validity_checks_bounds_and_obstacles() {
        let p = walled();
        assert!(p.is_valid(Point::new(0, 0)));
        assert!(p.is_valid(Point::new(6, 4)));
        assert!(p.is_valid(Point::new(4, 0)));
        assert!(!p.is_valid(Point::new(4, 1)));
        assert!(!p.is_valid(Point::new(7, 0)));
        assert!(!p.is_valid(Point::new(0, 5)));
        assert!(!p.is_valid(Point::new(-1, 2)));
    }

    #[test]
    fn goal_test() {
        let p = walled();
        assert!(p.is_goal(Point::new(6, 2)));
        assert!(!p.is_goal(Point::new(1, 2)));
    }

    #[test]
    fn obstacles_are_row_major() {
        let p = walled();
        assert_eq!(
            p.obstacles(),
            vec![
                Point::new(4, 1),
                Point::new(4, 2),
                Point::new(4, 3),
                Point::new(4, 4)
            ]
        );
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let p = walled();
        let mut buf = Vec::new();
        p.neighbors(Point::new(3, 2), &mut buf);
        assert_eq!(
            buf,
            vec![
                Point::new(3, 1),
                Point::new(3, 3),
                Point::new(2, 3),
                Point::new(2, 2),
                Point::new(2, 1),
            ]
        );

        buf.clear();
        p.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(1, 0), Point::new(1, 1), Point::new(0, 1)]);
    }

    #[test]
    fn validate_accepts_well_formed_problem() {
        assert_eq!(walled().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_contract_violations() {
        let wall = [Point::new(2, 2)];
        let cases = [
            (
                Problem::new(0, 5, Point::ZERO, Point::new(1, 1), NO_WALLS),
                ProblemError::EmptyGrid { width: 0, height: 5 },
            ),
            (
                Problem::new(3, 3, Point::new(3, 0), Point::new(1, 1), NO_WALLS),
                ProblemError::StartOutOfBounds(Point::new(3, 0)),
            ),
            (
                Problem::new(3, 3, Point::ZERO, Point::new(1, -1), NO_WALLS),
                ProblemError::GoalOutOfBounds(Point::new(1, -1)),
            ),
            (
                Problem::new(3, 3, Point::new(2, 2), Point::ZERO, wall),
                ProblemError::StartOnObstacle(Point::new(2, 2)),
            ),
            (
                Problem::new(3, 3, Point::ZERO, Point::new(2, 2), wall),
                ProblemError::GoalOnObstacle(Point::new(2, 2)),
            ),
            (
                Problem::new(3, 3, Point::ZERO, Point::ZERO, NO_WALLS),
                ProblemError::StartIsGoal(Point::ZERO),
            ),
        ];
        for (problem, want) in cases {
            assert_eq!(problem.validate(), Err(want));
        }
    }
}
