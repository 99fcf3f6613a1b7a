//! The single active selection and its four directional moves.
//!
//! Every move is total: at a boundary (first/last sibling, top level, leaf)
//! the cursor simply stays put.  Each method reports whether it moved so the
//! caller can decide whether anything needs redrawing.

use super::error::TreeError;
use super::tree::{NodeId, Tree};

/// Selected node, its parent, and its position among the parent's children.
///
/// Invariant: `tree.children_of(parent)[index] == current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub current: NodeId,
    pub parent: NodeId,
    pub index: usize,
}

impl Cursor {
    /// Seed the cursor on the first top-level node.
    pub fn new(tree: &Tree) -> Result<Self, TreeError> {
        let root = tree.root();
        let Some(&first) = tree.children_of(root).first() else {
            return Err(TreeError::Empty {
                root: tree.get(root).label.clone(),
            });
        };
        Ok(Self {
            current: first,
            parent: root,
            index: 0,
        })
    }

    /// Previous sibling.
    pub fn up(&mut self, tree: &Tree) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        self.current = tree.children_of(self.parent)[self.index];
        true
    }

    /// Next sibling.
    pub fn down(&mut self, tree: &Tree) -> bool {
        let siblings = tree.children_of(self.parent);
        if self.index + 1 >= siblings.len() {
            return false;
        }
        self.index += 1;
        self.current = siblings[self.index];
        true
    }

    /// Out to the parent, unless the parent is the root.
    pub fn left(&mut self, tree: &Tree) -> bool {
        let (Some(grandparent), Some(index)) =
            (tree.parent_of(self.parent), tree.index_in_parent(self.parent))
        else {
            return false;
        };
        self.current = self.parent;
        self.parent = grandparent;
        self.index = index;
        true
    }

    /// Into the first child; no-op on leaves.
    pub fn right(&mut self, tree: &Tree) -> bool {
        let Some(&first) = tree.children_of(self.current).first() else {
            return false;
        };
        self.parent = self.current;
        self.current = first;
        self.index = 0;
        true
    }
}
