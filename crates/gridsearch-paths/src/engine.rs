use std::collections::{HashSet, VecDeque};

use gridsearch_core::Point;

use crate::distance::euclidean;
use crate::node::{NodeId, Tree};
use crate::problem::Problem;
use crate::strategy::Strategy;

/// Where a run is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Running,
    /// The goal was dequeued; the solution path is available.
    Solved,
    /// The frontier ran empty without reaching the goal.
    Exhausted,
}

/// Frontier and visited cells after one expansion.
///
/// `frontier` is in dequeue order; `visited` is in the order cells were
/// closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub frontier: Vec<Point>,
    pub visited: Vec<Point>,
}

/// What one call to [`Engine::step`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepResult {
    /// One node was expanded; the run continues.
    Expanded(Snapshot),
    /// Terminal: path from start to goal, both inclusive.
    Solved(Vec<Point>),
    /// Terminal: no path exists.
    Exhausted,
}

impl StepResult {
    /// Whether the run has ended.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StepResult::Expanded(_))
    }
}

/// Final result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Solved(Vec<Point>),
    Exhausted,
}

impl Outcome {
    /// The solution path, if one was found.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Outcome::Solved(path) => Some(path),
            Outcome::Exhausted => None,
        }
    }
}

/// Search state for one run of one strategy over one problem.
///
/// Construct a fresh engine per run; there is no reset. The engine does no
/// work between calls to [`step`](Self::step), so cancelling is simply
/// dropping it.
#[derive(Debug)]
pub struct Engine {
    strategy: Strategy,
    problem: Problem,
    tree: Tree,
    open: VecDeque<NodeId>,
    open_set: HashSet<Point>,
    closed: Vec<Point>,
    closed_set: HashSet<Point>,
    status: Status,
    solution: Option<Vec<Point>>,
    expanded: usize,
    // set once the iterator has yielded the terminal result
    drained: bool,
    // shared scratch buffers for expansion
    nbuf: Vec<Point>,
    cbuf: Vec<NodeId>,
}

impl Engine {
    /// Start a run: the frontier holds the root node for `problem.start()`.
    pub fn new(strategy: Strategy, problem: Problem) -> Self {
        let start = problem.start();
        let mut tree = Tree::new();
        let root = tree.push_root(start, euclidean(start, problem.goal()));
        log::debug!(
            "{strategy} search from {start} to {} on {}x{} grid",
            problem.goal(),
            problem.width(),
            problem.height()
        );
        Self {
            strategy,
            problem,
            tree,
            open: VecDeque::from([root]),
            open_set: HashSet::from([start]),
            closed: Vec::new(),
            closed_set: HashSet::new(),
            status: Status::Running,
            solution: None,
            expanded: 0,
            drained: false,
            nbuf: Vec::with_capacity(8),
            cbuf: Vec::with_capacity(8),
        }
    }

    /// Advance the run by exactly one transition.
    ///
    /// Pops the frontier's head. If it is the goal the run is solved;
    /// otherwise it is closed and expanded and the new frontier and visited
    /// cells are returned. Once the run has ended every further call returns
    /// the same terminal result without doing any work.
    pub fn step(&mut self) -> StepResult {
        match self.status {
            Status::Running => {}
            Status::Solved => {
                return StepResult::Solved(self.solution.clone().unwrap_or_default());
            }
            Status::Exhausted => return StepResult::Exhausted,
        }

        let Some(id) = self.open.pop_front() else {
            self.status = Status::Exhausted;
            log::debug!(
                "{} search exhausted after {} expansions",
                self.strategy,
                self.expanded
            );
            return StepResult::Exhausted;
        };
        let state = self.tree[id].state;
        self.open_set.remove(&state);

        if self.problem.is_goal(state) {
            let path = self.tree.path_to(id);
            log::debug!(
                "{} search solved after {} expansions: {} moves",
                self.strategy,
                self.expanded,
                path.len() - 1
            );
            self.status = Status::Solved;
            self.solution = Some(path.clone());
            return StepResult::Solved(path);
        }

        self.closed.push(state);
        self.closed_set.insert(state);
        self.expand(id);
        self.expanded += 1;
        log::trace!(
            "expanded {state} (depth {}): open={} closed={}",
            self.tree[id].depth,
            self.open.len(),
            self.closed.len()
        );

        StepResult::Expanded(self.snapshot())
    }

    /// Generate the children of `id` and merge them into the frontier.
    ///
    /// A neighbor becomes a child only if it is valid and neither closed nor
    /// already queued.
    fn expand(&mut self, id: NodeId) {
        let state = self.tree[id].state;
        let goal = self.problem.goal();

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut cbuf = std::mem::take(&mut self.cbuf);
        nbuf.clear();
        cbuf.clear();
        self.problem.neighbors(state, &mut nbuf);

        for &np in nbuf.iter() {
            if self.closed_set.contains(&np) || self.open_set.contains(&np) {
                continue;
            }
            let child = self.tree.push_child(id, np, euclidean(np, goal));
            self.open_set.insert(np);
            cbuf.push(child);
        }
        self.strategy.merge(&mut self.open, &cbuf, &self.tree);

        self.nbuf = nbuf;
        self.cbuf = cbuf;
    }

    /// Step until the run ends.
    pub fn run(&mut self) -> Outcome {
        loop {
            match self.step() {
                StepResult::Expanded(_) => {}
                StepResult::Solved(path) => return Outcome::Solved(path),
                StepResult::Exhausted => return Outcome::Exhausted,
            }
        }
    }

    /// Current frontier and visited cells.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frontier: self.open_states(),
            visited: self.closed.clone(),
        }
    }

    /// Frontier cells in dequeue order.
    pub fn open_states(&self) -> Vec<Point> {
        self.open.iter().map(|&id| self.tree[id].state).collect()
    }

    /// Visited cells in the order they were closed.
    #[inline]
    pub fn closed_states(&self) -> &[Point] {
        &self.closed
    }

    /// Evaluation score `depth + euclidean(state, goal)` of a node.
    ///
    /// Only A* orders by it, but it is defined for every node.
    #[inline]
    pub fn evaluate(&self, id: NodeId) -> f64 {
        self.tree[id].f
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The path found, once the run is solved.
    #[inline]
    pub fn solution(&self) -> Option<&[Point]> {
        self.solution.as_deref()
    }

    /// Number of nodes expanded so far.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Every node generated so far; the root is the start.
    #[inline]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }
}

/// Yields each step result, up to and including the terminal one.
impl Iterator for Engine {
    type Item = StepResult;

    fn next(&mut self) -> Option<StepResult> {
        if self.drained {
            return None;
        }
        let result = self.step();
        if result.is_terminal() {
            self.drained = true;
        }
        Some(result)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn step_result_round_trip() {
        let step = StepResult::Expanded(Snapshot {
            frontier: vec![Point::new(1, 0)],
            visited: vec![Point::new(0, 0)],
        });
        let json = serde_json::to_string(&step).unwrap();
        let back: StepResult = serde_json::from_str(&json).unwrap();
        assert_eq!(step, back);
    }
}
