//! Cell classification for drawing a run, plus a plain-text frame.

use std::collections::HashSet;
use std::fmt;

use gridsearch_core::Point;

use crate::engine::Snapshot;
use crate::problem::Problem;

/// What a cell shows in a frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Empty,
    Obstacle,
    /// Queued but not yet expanded.
    Frontier,
    /// Already expanded.
    Visited,
    Start,
    Goal,
    /// On the (partially drawn) solution path.
    Path,
}

impl CellKind {
    /// Glyph used by the text rendering.
    pub fn glyph(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Obstacle => '-',
            CellKind::Frontier => '/',
            CellKind::Visited => 'x',
            CellKind::Start => 'S',
            CellKind::Goal => 'G',
            CellKind::Path => '*',
        }
    }
}

/// One picture of a run: the problem with frontier, visited and path cells
/// layered on top.
///
/// When a cell belongs to several layers the first match wins, in the order
/// path, start, goal, obstacle, visited, frontier. The text form prints row 0
/// first, glyphs separated by spaces.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    problem: &'a Problem,
    frontier: HashSet<Point>,
    visited: HashSet<Point>,
    path: HashSet<Point>,
}

impl<'a> Frame<'a> {
    /// A frame showing only the problem itself.
    pub fn new(problem: &'a Problem) -> Self {
        Self {
            problem,
            frontier: HashSet::new(),
            visited: HashSet::new(),
            path: HashSet::new(),
        }
    }

    pub fn with_frontier(mut self, cells: &[Point]) -> Self {
        self.frontier = cells.iter().copied().collect();
        self
    }

    pub fn with_visited(mut self, cells: &[Point]) -> Self {
        self.visited = cells.iter().copied().collect();
        self
    }

    /// Layer both lists of a [`Snapshot`].
    pub fn with_snapshot(self, snap: &Snapshot) -> Self {
        self.with_frontier(&snap.frontier).with_visited(&snap.visited)
    }

    pub fn with_path(mut self, cells: &[Point]) -> Self {
        self.path = cells.iter().copied().collect();
        self
    }

    #[inline]
    pub fn problem(&self) -> &Problem {
        self.problem
    }

    /// Classify one cell.
    pub fn cell(&self, p: Point) -> CellKind {
        if self.path.contains(&p) {
            return CellKind::Path;
        }
        if p == self.problem.start() {
            CellKind::Start
        } else if p == self.problem.goal() {
            CellKind::Goal
        } else if self.problem.is_obstacle(p) {
            CellKind::Obstacle
        } else if self.visited.contains(&p) {
            CellKind::Visited
        } else if self.frontier.contains(&p) {
            CellKind::Frontier
        } else {
            CellKind::Empty
        }
    }
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bounds = self.problem.bounds();
        for y in bounds.min.y..bounds.max.y {
            for x in bounds.min.x..bounds.max.x {
                if x > bounds.min.x {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.cell(Point::new(x, y)).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Growing prefixes of `path`: the first cell, the first two, and so on up
/// to the whole path. Used to animate a solution one cell per frame.
pub fn solution_prefixes(path: &[Point]) -> impl Iterator<Item = &[Point]> {
    (1..=path.len()).map(move |n| &path[..n])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Problem {
        let wall = [(4, 4), (4, 3), (4, 2), (4, 1)].map(Point::from);
        Problem::new(7, 5, Point::new(1, 2), Point::new(6, 2), wall)
    }

    #[test]
    fn bare_problem_text() {
        let p = example();
        let text = Frame::new(&p).to_string();
        let want = "\
. . . . . . .
. . . . - . .
. S . . - . G
. . . . - . .
. . . . - . .
";
        assert_eq!(text, want);
    }

    #[test]
    fn layers_override_in_order() {
        let p = example();
        let frame = Frame::new(&p)
            .with_frontier(&[Point::new(0, 0), Point::new(2, 2)])
            .with_visited(&[Point::new(2, 2), Point::new(1, 2)])
            .with_path(&[Point::new(6, 2)]);
        assert_eq!(frame.cell(Point::new(0, 0)), CellKind::Frontier);
        assert_eq!(frame.cell(Point::new(2, 2)), CellKind::Visited);
        assert_eq!(frame.cell(Point::new(1, 2)), CellKind::Start);
        assert_eq!(frame.cell(Point::new(6, 2)), CellKind::Path);
        assert_eq!(frame.cell(Point::new(4, 3)), CellKind::Obstacle);
        assert_eq!(frame.cell(Point::new(5, 0)), CellKind::Empty);
    }

    #[test]
    fn overlapping_layers_follow_precedence() {
        let (s, g) = (Point::new(0, 0), Point::new(2, 0));
        let all = [s, Point::new(1, 0), g, Point::new(3, 0)];
        let p = Problem::new(4, 1, s, g, [s, Point::new(1, 0), g]);
        let frame = Frame::new(&p).with_frontier(&all).with_visited(&all);
        assert_eq!(frame.cell(s), CellKind::Start);
        assert_eq!(frame.cell(g), CellKind::Goal);
        assert_eq!(frame.cell(Point::new(1, 0)), CellKind::Obstacle);
        assert_eq!(frame.cell(Point::new(3, 0)), CellKind::Visited);
        assert_eq!(frame.to_string(), "S - G x\n");

        let frame = frame.with_path(&all);
        assert!(all.iter().all(|&c| frame.cell(c) == CellKind::Path));
    }

    #[test]
    fn snapshot_layers() {
        let p = example();
        let snap = Snapshot {
            frontier: vec![Point::new(2, 1)],
            visited: vec![Point::new(1, 2)],
        };
        let frame = Frame::new(&p).with_snapshot(&snap);
        assert_eq!(frame.cell(Point::new(2, 1)), CellKind::Frontier);
        let text = frame.to_string();
        assert_eq!(text.lines().nth(1), Some(". . / . - . ."));
    }

    #[test]
    fn prefixes_grow_to_full_path() {
        let path = [Point::new(0, 0), Point::new(1, 1), Point::new(2, 1)];
        let got: Vec<&[Point]> = solution_prefixes(&path).collect();
        assert_eq!(got.len(), 3);
        assert_eq!(got[0], &path[..1]);
        assert_eq!(got[2], &path[..]);
        assert_eq!(solution_prefixes(&[]).count(), 0);
    }
}
