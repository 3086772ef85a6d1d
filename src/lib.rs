//! An AVL tree over unique `i32` keys.
//!
//! The tree keeps a membership set next to its nodes so that duplicate insertions can be
//! rejected in constant time, and exposes eager pre-order, in-order and post-order
//! traversals.
//!
//! # Examples
//! ```
//! use unique_avl::avl_tree::{BalancedTree, TraversalOrder};
//!
//! let mut tree = BalancedTree::new();
//! for key in &[30, 10, 20] {
//!     tree.insert_unique(*key).unwrap();
//! }
//!
//! assert_eq!(tree.to_array(), vec![10, 20, 30]);
//! assert_eq!(tree.traverse(TraversalOrder::PreOrder), vec![20, 10, 30]);
//! ```

pub mod avl_tree;
