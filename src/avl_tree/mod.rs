//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod balanced_tree;
mod config;
mod node;
mod order;
mod tree;

pub use self::balanced_tree::BalancedTree;
pub use self::config::Config;
pub use self::node::Node;
pub use self::order::{ParseTraversalOrderError, TraversalOrder};

use std::error;
use std::fmt;
use std::result;

/// The rotation case applied to restore balance at the lowest unbalanced node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    /// A right rotation at the unbalanced node.
    LeftLeft,
    /// A left rotation at the unbalanced node.
    RightRight,
    /// A left rotation at the left child followed by a right rotation at the unbalanced node.
    LeftRight,
    /// A right rotation at the right child followed by a left rotation at the unbalanced node.
    RightLeft,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The key is already live in the tree. The tree is left unchanged.
    DuplicateKey(i32),
    /// The key is not in the tree. The tree is left unchanged.
    KeyNotFound(i32),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DuplicateKey(key) => write!(f, "Duplicate value: {}", key),
            Error::KeyNotFound(key) => write!(f, "Value not found: {}", key),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
