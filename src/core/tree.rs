//! In-memory hierarchy of labeled, described nodes.
//!
//! Nodes live in a flat arena (the [`Tree`] struct) and reference each other
//! by [`NodeId`].  The parent link is a plain index, so it never owns
//! anything and upward walks stay O(depth).

// ───────────────────────────────────────── node ──────────────

/// Index into a [`Tree`]'s node arena.
pub type NodeId = usize;

/// A single node in the arena-allocated tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub label: String,
    pub description: String,
    pub parent: Option<NodeId>,
    /// Insertion order; defines the sibling index used by up/down moves.
    pub children: Vec<NodeId>,
    /// Depth from the root (0 = root, 1 = top-level rows).
    pub depth: usize,
}

// ───────────────────────────────────────── arena tree ────────

/// Arena-backed tree.  The root is never displayed; only its descendants are.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// Create a new tree with a single root node.
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        let root = Node {
            label: label.into(),
            description: description.into(),
            parent: None,
            children: Vec::new(),
            depth: 0,
        };
        Self {
            nodes: vec![root],
            root: 0,
        }
    }

    /// Append a child under `parent` and return its [`NodeId`].
    pub fn add_child(
        &mut self,
        parent: NodeId,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> NodeId {
        let depth = self.nodes[parent].depth + 1;
        let id = self.nodes.len();
        self.nodes.push(Node {
            label: label.into(),
            description: description.into(),
            parent: Some(parent),
            children: Vec::new(),
            depth,
        });
        self.nodes[parent].children.push(id);
        id
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Return a reference to a node.
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    /// Position of `id` among its parent's children (linear scan).
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.nodes[id].parent?;
        self.nodes[parent].children.iter().position(|&c| c == id)
    }

    /// True when `id` is the last child of its parent.  The root counts as last.
    pub fn is_last_sibling(&self, id: NodeId) -> bool {
        match self.nodes[id].parent {
            Some(parent) => self.nodes[parent].children.last() == Some(&id),
            None => true,
        }
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the root has no children, i.e. nothing is selectable.
    pub fn is_empty(&self) -> bool {
        self.nodes[self.root].children.is_empty()
    }

    /// Pre-order walk of every node under the root (the root itself excluded).
    /// This is the order rows are displayed in.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len().saturating_sub(1));
        for &child in &self.nodes[self.root].children {
            self.collect_preorder(child, &mut out);
        }
        out
    }

    fn collect_preorder(&self, id: NodeId, out: &mut Vec<NodeId>) {
        out.push(id);
        for &child in &self.nodes[id].children {
            self.collect_preorder(child, out);
        }
    }
}

// ───────────────────────────────────────── builder ───────────

/// Declarative description of a subtree, turned into a [`Tree`] in one go.
///
/// ```
/// use treeglide::core::tree::NodeSpec;
///
/// let tree = NodeSpec::new("root", "")
///     .child(NodeSpec::new("A", "first").child(NodeSpec::new("A1", "")))
///     .child(NodeSpec::new("B", "second"))
///     .build();
///
/// assert_eq!(tree.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NodeSpec {
    pub label: String,
    pub description: String,
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }

    /// Consume the spec, treating `self` as the root.
    pub fn build(self) -> Tree {
        let mut tree = Tree::new(self.label, self.description);
        let root = tree.root();
        let mut stack: Vec<(NodeId, NodeSpec)> =
            self.children.into_iter().rev().map(|c| (root, c)).collect();

        while let Some((parent, spec)) = stack.pop() {
            let id = tree.add_child(parent, spec.label, spec.description);
            stack.extend(spec.children.into_iter().rev().map(|c| (id, c)));
        }
        tree
    }
}
