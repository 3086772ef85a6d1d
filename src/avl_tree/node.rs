use crate::avl_tree::tree;
use std::cmp;

/// A struct representing an internal node of an avl tree.
#[derive(Debug)]
pub struct Node {
    pub(crate) key: i32,
    pub(crate) height: usize,
    pub(crate) left: tree::Tree,
    pub(crate) right: tree::Tree,
}

impl Node {
    pub(crate) fn new(key: i32) -> Self {
        Node {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub(crate) fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = *self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    /// Returns the key stored in this node.
    pub fn key(&self) -> i32 {
        self.key
    }

    /// Returns the stored height of this node. A leaf has a height of one.
    ///
    /// The stored height can be stale if the tree was built with a delete policy that skips
    /// rebalancing.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the left child of this node, if any.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_ref().map(|node| &**node)
    }

    /// Returns the right child of this node, if any.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_ref().map(|node| &**node)
    }

    /// Returns the height of the left subtree minus the height of the right subtree.
    pub fn balance_factor(&self) -> i32 {
        (tree::height(&self.left) as i32) - (tree::height(&self.right) as i32)
    }
}
