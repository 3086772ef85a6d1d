use crate::avl_tree::node::Node;
use crate::avl_tree::{Error, Result, Rotation, TraversalOrder};
use log::trace;
use std::cmp::{self, Ordering};
use std::collections::HashSet;

pub type Tree = Option<Box<Node>>;

pub fn height(tree: &Tree) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

pub fn balance_factor(tree: &Tree) -> i32 {
    match tree {
        None => 0,
        Some(ref node) => node.balance_factor(),
    }
}

pub fn len(tree: &Tree) -> usize {
    match tree {
        None => 0,
        Some(ref node) => 1 + len(&node.left) + len(&node.right),
    }
}

// a node without a right child is returned unchanged
fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => return node,
    };
    trace!("rotating left at {}", node.key);
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

// a node without a left child is returned unchanged
fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => return node,
    };
    trace!("rotating right at {}", node.key);
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Restores balance on the unwind of an insertion. The case is chosen by comparing the
// inserted key against the heavy child.
fn balance_inserted(tree: &mut Tree, key: i32) -> Option<Rotation> {
    let mut node = tree.take()?;
    node.update();

    let balance = node.balance_factor();
    let mut rotation = None;
    if balance > 1 {
        match node.left.as_ref().map(|left| key.cmp(&left.key)) {
            Some(Ordering::Less) => {
                node = rotate_right(node);
                rotation = Some(Rotation::LeftLeft);
            },
            Some(Ordering::Greater) => {
                node.left = node.left.take().map(rotate_left);
                node = rotate_right(node);
                rotation = Some(Rotation::LeftRight);
            },
            _ => {},
        }
    } else if balance < -1 {
        match node.right.as_ref().map(|right| key.cmp(&right.key)) {
            Some(Ordering::Greater) => {
                node = rotate_left(node);
                rotation = Some(Rotation::RightRight);
            },
            Some(Ordering::Less) => {
                node.right = node.right.take().map(rotate_right);
                node = rotate_left(node);
                rotation = Some(Rotation::RightLeft);
            },
            _ => {},
        }
    }

    *tree = Some(node);
    rotation
}

// Restores balance on the unwind of a deletion. There is no inserted key to steer by, so the
// case is chosen by the balance factor of the heavy child.
fn balance(tree: &mut Tree) -> Option<Rotation> {
    let mut node = tree.take()?;
    node.update();

    let balance = node.balance_factor();
    let rotation = if balance > 1 {
        if balance_factor(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
            node = rotate_right(node);
            Some(Rotation::LeftRight)
        } else {
            node = rotate_right(node);
            Some(Rotation::LeftLeft)
        }
    } else if balance < -1 {
        if balance_factor(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
            node = rotate_left(node);
            Some(Rotation::RightLeft)
        } else {
            node = rotate_left(node);
            Some(Rotation::RightRight)
        }
    } else {
        None
    };

    *tree = Some(node);
    rotation
}

/// Inserts `key` as a new leaf and rebalances every ancestor on the way back up. Returns the
/// rotation case that was applied, if any. At most one case applies per insertion.
pub fn insert(tree: &mut Tree, key: i32) -> Result<Option<Rotation>> {
    let rotation = match tree {
        Some(ref mut node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key)?,
            Ordering::Greater => insert(&mut node.right, key)?,
            Ordering::Equal => return Err(Error::DuplicateKey(key)),
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return Ok(None);
        },
    };

    let applied = balance_inserted(tree, key);
    Ok(rotation.or(applied))
}

/// Removes the node holding `key`. A node with two children takes the key of its in-order
/// successor, which is then removed from the right subtree instead.
///
/// When `rebalance` is false the unwind leaves heights and shape untouched, so the result may
/// no longer be an avl tree.
pub fn remove(tree: &mut Tree, key: i32, rebalance: bool) -> bool {
    let removed = match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let removed = remove(&mut node.left, key, rebalance);
                *tree = Some(node);
                removed
            },
            Ordering::Greater => {
                let removed = remove(&mut node.right, key, rebalance);
                *tree = Some(node);
                removed
            },
            Ordering::Equal => {
                match (node.left.take(), node.right.take()) {
                    (None, None) => {},
                    (Some(child), None) | (None, Some(child)) => *tree = Some(child),
                    (Some(left), Some(right)) => {
                        let successor = min_node(&right).key;
                        node.key = successor;
                        node.left = Some(left);
                        node.right = Some(right);
                        remove(&mut node.right, successor, rebalance);
                        *tree = Some(node);
                    },
                }
                true
            },
        },
        None => return false,
    };

    if removed && rebalance {
        if let Some(rotation) = balance(tree) {
            trace!("rebalanced after removing {} with {:?}", key, rotation);
        }
    }
    removed
}

pub fn min_node(node: &Node) -> &Node {
    let mut curr = node;
    while let Some(ref left) = curr.left {
        curr = &**left;
    }
    curr
}

/// Appends the keys of `tree` to `keys` in the given order, skipping keys that are not in
/// `members`.
pub fn traverse(tree: &Tree, order: TraversalOrder, members: &HashSet<i32>, keys: &mut Vec<i32>) {
    let node = match tree {
        Some(ref node) => node,
        None => return,
    };

    if order == TraversalOrder::PreOrder {
        visit(node, members, keys);
    }
    traverse(&node.left, order, members, keys);
    if order == TraversalOrder::InOrder {
        visit(node, members, keys);
    }
    traverse(&node.right, order, members, keys);
    if order == TraversalOrder::PostOrder {
        visit(node, members, keys);
    }
}

fn visit(node: &Node, members: &HashSet<i32>, keys: &mut Vec<i32>) {
    if members.contains(&node.key) {
        keys.push(node.key);
    }
}

/// Checks ordering, balance and stored heights of every node.
pub fn is_avl(tree: &Tree) -> bool {
    checked_height(tree, None, None).is_some()
}

fn checked_height(tree: &Tree, lower: Option<i32>, upper: Option<i32>) -> Option<usize> {
    let node = match tree {
        Some(ref node) => node,
        None => return Some(0),
    };

    if lower.map_or(false, |lower| node.key <= lower) || upper.map_or(false, |upper| node.key >= upper) {
        return None;
    }

    let left = checked_height(&node.left, lower, Some(node.key))?;
    let right = checked_height(&node.right, Some(node.key), upper)?;
    let skew = if left > right { left - right } else { right - left };
    if skew > 1 || node.height != cmp::max(left, right) + 1 {
        return None;
    }
    Some(node.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(key: i32) -> Tree {
        Some(Box::new(Node::new(key)))
    }

    fn build(keys: &[i32]) -> Tree {
        let mut tree = None;
        for key in keys {
            insert(&mut tree, *key).unwrap();
        }
        tree
    }

    fn all_members(tree: &Tree) -> HashSet<i32> {
        let mut keys = Vec::new();
        let mut members = HashSet::new();
        collect(tree, &mut keys);
        members.extend(keys);
        members
    }

    fn collect(tree: &Tree, keys: &mut Vec<i32>) {
        if let Some(ref node) = tree {
            collect(&node.left, keys);
            keys.push(node.key);
            collect(&node.right, keys);
        }
    }

    #[test]
    fn test_height_empty() {
        let tree: Tree = None;
        assert_eq!(height(&tree), 0);
        assert_eq!(balance_factor(&tree), 0);
    }

    #[test]
    fn test_rotate_right() {
        let mut root = Node::new(3);
        let mut left = Node::new(2);
        left.left = leaf(1);
        left.update();
        root.left = Some(Box::new(left));
        root.update();
        assert_eq!(root.height, 3);

        let root = rotate_right(Box::new(root));
        assert_eq!(root.key, 2);
        assert_eq!(root.height, 2);
        assert_eq!(root.left().map(|node| node.key()), Some(1));
        assert_eq!(root.right().map(|node| (node.key(), node.height())), Some((3, 1)));
    }

    #[test]
    fn test_rotate_left_moves_inner_subtree() {
        let mut root = Node::new(1);
        let mut right = Node::new(3);
        right.left = leaf(2);
        right.right = leaf(4);
        right.update();
        root.right = Some(Box::new(right));
        root.update();

        let root = rotate_left(Box::new(root));
        assert_eq!(root.key, 3);
        let left = root.left().unwrap();
        assert_eq!(left.key(), 1);
        assert_eq!(left.right().map(|node| node.key()), Some(2));
        assert_eq!(left.height(), 2);
        assert_eq!(root.height, 3);
    }

    #[test]
    fn test_rotate_without_child() {
        let root = rotate_left(Box::new(Node::new(1)));
        assert_eq!(root.key, 1);
        let root = rotate_right(root);
        assert_eq!(root.key, 1);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(insert(&mut tree, 3), Err(Error::DuplicateKey(3)));
        assert_eq!(len(&tree), 3);
        assert!(is_avl(&tree));
    }

    #[test]
    fn test_insert_cases() {
        let cases = [
            ([3, 2, 1], Rotation::LeftLeft),
            ([1, 2, 3], Rotation::RightRight),
            ([3, 1, 2], Rotation::LeftRight),
            ([1, 3, 2], Rotation::RightLeft),
        ];
        for (keys, expected) in cases.iter() {
            let mut tree = None;
            assert_eq!(insert(&mut tree, keys[0]), Ok(None));
            assert_eq!(insert(&mut tree, keys[1]), Ok(None));
            assert_eq!(insert(&mut tree, keys[2]), Ok(Some(*expected)));
            assert_eq!(tree.as_ref().map(|node| node.key), Some(2));
            assert!(is_avl(&tree));
        }
    }

    #[test]
    fn test_min_node() {
        let tree = build(&[5, 3, 8, 1, 4]);
        assert_eq!(tree.as_ref().map(|node| min_node(node).key), Some(1));
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = build(&[2, 1, 3]);
        assert!(!remove(&mut tree, 4, true));
        assert!(!remove(&mut None, 4, true));
        assert_eq!(len(&tree), 3);
    }

    #[test]
    fn test_remove_two_children_takes_successor() {
        let mut tree = build(&[4, 2, 6, 1, 3, 5, 7]);
        assert!(remove(&mut tree, 4, false));
        assert_eq!(tree.as_ref().map(|node| node.key), Some(5));
        assert!(is_avl(&tree));
    }

    #[test]
    fn test_remove_without_rebalance_leaves_skew() {
        let mut tree = build(&[2, 1, 3, 4]);
        assert!(remove(&mut tree, 1, false));
        assert_eq!(tree.as_ref().map(|node| node.height), Some(3));
        assert!(!is_avl(&tree));
    }

    #[test]
    fn test_remove_with_rebalance() {
        let mut tree = build(&[2, 1, 3, 4]);
        assert!(remove(&mut tree, 1, true));
        assert_eq!(tree.as_ref().map(|node| node.key), Some(3));
        assert!(is_avl(&tree));
    }

    #[test]
    fn test_traverse_orders() {
        let tree = build(&[4, 2, 6, 1, 3, 5, 7]);
        let members = all_members(&tree);
        let run = |order| {
            let mut keys = Vec::new();
            traverse(&tree, order, &members, &mut keys);
            keys
        };
        assert_eq!(run(TraversalOrder::InOrder), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(run(TraversalOrder::PreOrder), vec![4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(run(TraversalOrder::PostOrder), vec![1, 3, 2, 5, 7, 6, 4]);
    }

    #[test]
    fn test_traverse_filters_members() {
        let tree = build(&[2, 1, 3]);
        let mut members = all_members(&tree);
        members.remove(&1);
        let mut keys = Vec::new();
        traverse(&tree, TraversalOrder::InOrder, &members, &mut keys);
        assert_eq!(keys, vec![2, 3]);
    }

    #[test]
    fn test_is_avl_detects_disorder() {
        let mut root = Node::new(2);
        root.left = leaf(3);
        root.update();
        assert!(!is_avl(&Some(Box::new(root))));
    }
}
