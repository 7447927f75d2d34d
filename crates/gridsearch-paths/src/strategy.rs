use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseStrategyError;
use crate::node::{NodeId, Tree};

/// How newly generated children join the frontier.
///
/// Every strategy pops the frontier's head; they differ only in where
/// children are inserted and whether the frontier is re-ordered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Children go to the front as a block, in generation order.
    DepthFirst,
    /// Children go to the back.
    BreadthFirst,
    /// Children go to the back, then the frontier is stably sorted by
    /// ascending `depth + euclidean(state, goal)`.
    #[default]
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::DepthFirst, Strategy::BreadthFirst, Strategy::AStar];

    /// Short lowercase name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::AStar => "astar",
        }
    }

    /// Merge `children` into the frontier.
    pub(crate) fn merge(self, open: &mut VecDeque<NodeId>, children: &[NodeId], tree: &Tree) {
        match self {
            Strategy::DepthFirst => {
                for &c in children.iter().rev() {
                    open.push_front(c);
                }
            }
            Strategy::BreadthFirst => open.extend(children),
            Strategy::AStar => {
                open.extend(children);
                // slice::sort_by is stable: equal scores keep insertion order.
                open.make_contiguous().sort_by(|&a, &b| tree[a].f.total_cmp(&tree[b].f));
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::DepthFirst => "depth-first",
            Strategy::BreadthFirst => "breadth-first",
            Strategy::AStar => "A*",
        };
        f.write_str(label)
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "astar" | "a*" => Ok(Strategy::AStar),
            _ => Err(ParseStrategyError(s.to_owned())),
        }
    }
}
