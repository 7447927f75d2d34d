use gridsearch_core::Point;
use thiserror::Error;

/// Reasons a [`Problem`](crate::Problem) is unfit to search.
///
/// Only returned by [`Problem::validate`](crate::Problem::validate); the
/// engine itself never checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: i32, height: i32 },
    #[error("start {0} is outside the grid")]
    StartOutOfBounds(Point),
    #[error("goal {0} is outside the grid")]
    GoalOutOfBounds(Point),
    #[error("start {0} is on an obstacle")]
    StartOnObstacle(Point),
    #[error("goal {0} is on an obstacle")]
    GoalOnObstacle(Point),
    #[error("start and goal are both {0}")]
    StartIsGoal(Point),
}

/// Returned when a strategy name is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy {0:?} (expected dfs, bfs or astar)")]
pub struct ParseStrategyError(pub String);
