use std::ops::Index;

use gridsearch_core::Point;

/// Stable handle to a [`Node`] in a [`Tree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in creation order (the root is 0).
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One state of the search tree. Never mutated after creation, except for
/// its child list.
#[derive(Debug, Clone)]
pub struct Node {
    pub state: Point,
    pub parent: Option<NodeId>,
    /// Moves from the root.
    pub depth: u32,
    /// Evaluation score `depth + h(state)`, fixed at creation.
    pub f: f64,
    pub children: Vec<NodeId>,
}

/// Arena owning every node generated during one run.
///
/// Nodes point at their parent by [`NodeId`], so the tree holds no reference
/// cycles and dropping the arena releases the whole run.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a depth-0 node with no parent.
    pub fn push_root(&mut self, state: Point, f: f64) -> NodeId {
        self.push(Node {
            state,
            parent: None,
            depth: 0,
            f,
            children: Vec::new(),
        })
    }

    /// Add a child of `parent` one move deeper and record it on the parent.
    /// `h` is the heuristic value of `state`.
    pub fn push_child(&mut self, parent: NodeId, state: Point, h: f64) -> NodeId {
        let depth = self.nodes[parent.0].depth + 1;
        let id = self.push(Node {
            state,
            parent: Some(parent),
            depth,
            f: f64::from(depth) + h,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// The first node pushed, if any.
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId(0))
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// States from the root to `id`, both inclusive.
    pub fn path_to(&self, id: NodeId) -> Vec<Point> {
        let mut path = Vec::with_capacity(self[id].depth as usize + 1);
        let mut cur = Some(id);
        while let Some(ci) = cur {
            let node = &self[ci];
            path.push(node.state);
            cur = node.parent;
        }
        path.reverse();
        path
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_track_depth_and_parent() {
        let mut tree = Tree::new();
        let root = tree.push_root(Point::new(1, 2), 5.0);
        let a = tree.push_child(root, Point::new(2, 2), 4.0);
        let b = tree.push_child(a, Point::new(3, 1), 3.0);

        assert_eq!(tree.len(), 3);
        assert_eq!(tree[root].depth, 0);
        assert_eq!(tree[b].depth, 2);
        assert_eq!(tree[b].parent, Some(a));
        assert_eq!(tree[b].f, 5.0);
        assert_eq!(tree[root].children, vec![a]);
        assert_eq!(tree[a].children, vec![b]);
        assert_eq!(b.index(), 2);
    }

    #[test]
    fn path_walks_parents_to_root() {
        let mut tree = Tree::new();
        let root = tree.push_root(Point::new(0, 0), 0.0);
        let a = tree.push_child(root, Point::new(1, 1), 0.0);
        let _sibling = tree.push_child(root, Point::new(0, 1), 0.0);
        let b = tree.push_child(a, Point::new(2, 1), 0.0);

        assert_eq!(
            tree.path_to(b),
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 1)]
        );
        assert_eq!(tree.path_to(root), vec![Point::new(0, 0)]);
    }

    #[test]
    fn get_out_of_arena_is_none() {
        let tree = Tree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert!(tree.get(NodeId(0)).is_none());
    }
}
