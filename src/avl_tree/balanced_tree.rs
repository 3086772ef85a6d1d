use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::avl_tree::{Config, Error, Result, Rotation, TraversalOrder};
use log::{debug, warn};
use std::collections::HashSet;

/// An avl tree over unique `i32` keys.
///
/// Next to its nodes the tree keeps a membership set of live keys. Insertions are checked
/// against the set before the tree is descended, and traversals only emit keys found in the
/// set. What a deletion does to the set and to the balance of the tree is controlled by
/// [`Config`].
///
/// # Examples
/// ```
/// use unique_avl::avl_tree::{BalancedTree, Error, Rotation};
///
/// let mut tree = BalancedTree::new();
/// assert_eq!(tree.insert_unique(10), Ok(None));
/// assert_eq!(tree.insert_unique(20), Ok(None));
/// assert_eq!(tree.insert_unique(30), Ok(Some(Rotation::RightRight)));
/// assert_eq!(tree.insert_unique(20), Err(Error::DuplicateKey(20)));
///
/// assert!(tree.delete(10));
/// assert_eq!(tree.to_array(), vec![20, 30]);
/// ```
#[derive(Debug, Default)]
pub struct BalancedTree {
    root: tree::Tree,
    members: HashSet<i32>,
    len: usize,
    config: Config,
}

impl BalancedTree {
    /// Constructs a new, empty `BalancedTree` with the default [`Config`].
    ///
    /// # Examples
    /// ```
    /// use unique_avl::avl_tree::BalancedTree;
    ///
    /// let tree = BalancedTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Constructs a new, empty `BalancedTree` whose deletions follow `config`.
    ///
    /// # Examples
    /// ```
    /// use unique_avl::avl_tree::{BalancedTree, Config, Error};
    ///
    /// let mut tree = BalancedTree::with_config(Config::reference());
    /// tree.insert_unique(1).unwrap();
    /// tree.delete(1);
    /// assert_eq!(tree.insert_unique(1), Err(Error::DuplicateKey(1)));
    /// ```
    pub fn with_config(config: Config) -> Self {
        BalancedTree {
            root: None,
            members: HashSet::new(),
            len: 0,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Inserts a key into the tree and returns the rotation case used to rebalance it, if any.
    /// A key that is already live is rejected with `Error::DuplicateKey` and leaves the tree
    /// untouched.
    ///
    /// # Examples
    /// ```
    /// use unique_avl::avl_tree::{BalancedTree, Error, Rotation};
    ///
    /// let mut tree = BalancedTree::new();
    /// tree.insert_unique(30).unwrap();
    /// tree.insert_unique(10).unwrap();
    /// assert_eq!(tree.insert_unique(20), Ok(Some(Rotation::LeftRight)));
    /// assert_eq!(tree.insert_unique(10), Err(Error::DuplicateKey(10)));
    /// ```
    pub fn insert_unique(&mut self, key: i32) -> Result<Option<Rotation>> {
        if self.members.contains(&key) {
            warn!("Duplicate value: {}", key);
            return Err(Error::DuplicateKey(key));
        }

        let rotation = tree::insert(&mut self.root, key)?;
        self.members.insert(key);
        self.len += 1;
        match rotation {
            Some(rotation) => debug!("inserted {} with {:?} rotation", key, rotation),
            None => debug!("inserted {}", key),
        }
        Ok(rotation)
    }

    /// Removes a key from the tree. Returns `true` if a node was removed; an absent key is a
    /// no-op.
    ///
    /// # Examples
    /// ```
    /// use unique_avl::avl_tree::BalancedTree;
    ///
    /// let mut tree = BalancedTree::new();
    /// tree.insert_unique(1).unwrap();
    /// assert!(tree.delete(1));
    /// assert!(!tree.delete(1));
    /// ```
    pub fn delete(&mut self, key: i32) -> bool {
        self.try_delete(key).is_ok()
    }

    /// Removes a key from the tree, reporting an absent key as `Error::KeyNotFound`.
    ///
    /// # Examples
    /// ```
    /// use unique_avl::avl_tree::{BalancedTree, Error};
    ///
    /// let mut tree = BalancedTree::new();
    /// assert_eq!(tree.try_delete(1), Err(Error::KeyNotFound(1)));
    /// ```
    pub fn try_delete(&mut self, key: i32) -> Result<()> {
        if !tree::remove(&mut self.root, key, self.config.rebalance_on_delete) {
            debug!("{} not found, nothing deleted", key);
            return Err(Error::KeyNotFound(key));
        }

        self.len -= 1;
        if self.config.forget_deleted_keys {
            self.members.remove(&key);
        }
        debug!("deleted {}", key);
        Ok(())
    }

    /// Checks if a key is live in the tree.
    ///
    /// With [`Config::reference`] a deleted key stays live.
    ///
    /// # Examples
    /// ```
    /// use unique_avl::avl_tree::BalancedTree;
    ///
    /// let mut tree = BalancedTree::new();
    /// tree.insert_unique(1).unwrap();
    /// assert!(tree.contains(1));
    /// assert!(!tree.contains(2));
    /// ```
    pub fn contains(&self, key: i32) -> bool {
        self.members.contains(&key)
    }

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every node and forgets every key.
    ///
    /// # Examples
    /// ```
    /// use unique_avl::avl_tree::BalancedTree;
    ///
    /// let mut tree = BalancedTree::new();
    /// tree.insert_unique(1).unwrap();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.insert_unique(1), Ok(None));
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.members.clear();
        self.len = 0;
    }

    /// Returns the stored height of the root, or zero for an empty tree.
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref().map(|node| &**node)
    }

    /// Returns `true` if the tree is ordered, balanced, and every stored height is correct.
    pub fn is_avl(&self) -> bool {
        tree::is_avl(&self.root)
    }

    /// Returns the live keys of the tree in the given order.
    ///
    /// # Examples
    /// ```
    /// use unique_avl::avl_tree::{BalancedTree, TraversalOrder};
    ///
    /// let mut tree = BalancedTree::new();
    /// for key in &[2, 1, 3] {
    ///     tree.insert_unique(*key).unwrap();
    /// }
    /// assert_eq!(tree.traverse(TraversalOrder::PreOrder), vec![2, 1, 3]);
    /// assert_eq!(tree.traverse(TraversalOrder::PostOrder), vec![1, 3, 2]);
    /// ```
    pub fn traverse(&self, order: TraversalOrder) -> Vec<i32> {
        let mut keys = Vec::with_capacity(self.len);
        tree::traverse(&self.root, order, &self.members, &mut keys);
        keys
    }

    /// Returns the live keys of the tree in ascending order.
    pub fn to_array(&self) -> Vec<i32> {
        self.traverse(TraversalOrder::InOrder)
    }
}
