use serde_derive::{Deserialize, Serialize};
use std::error;
use std::fmt;
use std::str::FromStr;

/// The order in which the keys of a tree are visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraversalOrder {
    /// Root, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then root, then right subtree. Yields keys in ascending order.
    InOrder,
    /// Left subtree, then right subtree, then root.
    PostOrder,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 3] = [
        TraversalOrder::InOrder,
        TraversalOrder::PreOrder,
        TraversalOrder::PostOrder,
    ];
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TraversalOrder::PreOrder => "Preorder",
            TraversalOrder::InOrder => "Inorder",
            TraversalOrder::PostOrder => "Postorder",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseTraversalOrderError(String);

impl fmt::Display for ParseTraversalOrderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown traversal order: {}", self.0)
    }
}

impl error::Error for ParseTraversalOrderError {}

impl FromStr for TraversalOrder {
    type Err = ParseTraversalOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pre" | "preorder" => Ok(TraversalOrder::PreOrder),
            "in" | "inorder" => Ok(TraversalOrder::InOrder),
            "post" | "postorder" => Ok(TraversalOrder::PostOrder),
            _ => Err(ParseTraversalOrderError(s.to_string())),
        }
    }
}
