//! Step-by-step search on 2D grids with obstacles.
//!
//! This crate finds a path between a start cell and a goal cell using one of
//! three interchangeable strategies, one expansion at a time:
//!
//! - **Depth-first** ([`Strategy::DepthFirst`]): children are pushed onto the
//!   front of the frontier.
//! - **Breadth-first** ([`Strategy::BreadthFirst`]): children are queued at the
//!   back; shortest path by move count.
//! - **A\*** ([`Strategy::AStar`]): the frontier is kept sorted by
//!   `depth + euclidean(state, goal)`.
//!
//! An [`Engine`] owns a [`Problem`] and a node [`Tree`]. Every call to
//! [`Engine::step`] performs one transition and returns a [`StepResult`]
//! holding the frontier and visited cells, ready to be drawn as one frame.
//!
//! ```
//! use gridsearch_core::Point;
//! use gridsearch_paths::{Engine, Outcome, Problem, Strategy};
//!
//! let wall = (1..5).map(|y| Point::new(4, y));
//! let problem = Problem::new(7, 5, Point::new(1, 2), Point::new(6, 2), wall);
//! let mut engine = Engine::new(Strategy::BreadthFirst, problem);
//! let Outcome::Solved(path) = engine.run() else { panic!("no path") };
//! assert_eq!(path.len(), 6);
//! assert_eq!(path[3], Point::new(4, 0));
//! ```

mod distance;
mod engine;
mod error;
mod neighbors;
mod node;
mod problem;
mod render;
mod strategy;

pub use distance::{chebyshev, euclidean};
pub use engine::{Engine, Outcome, Snapshot, Status, StepResult};
pub use error::{ParseStrategyError, ProblemError};
pub use neighbors::OPERATORS;
pub use node::{Node, NodeId, Tree};
pub use problem::Problem;
pub use render::{CellKind, Frame, solution_prefixes};
pub use strategy::Strategy;
