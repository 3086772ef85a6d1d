use serde_derive::{Deserialize, Serialize};

/// Controls what a deletion does besides unlinking the node.
///
/// The default keeps the tree an avl tree under deletion and forgets deleted keys so they can
/// be inserted again. [`Config::reference`] turns both off: heights and shape are then left as
/// they are after a deletion, and a deleted key stays in the membership set, so a later insert
/// of that key is rejected as a duplicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Recompute heights and rotate on every ancestor of a removed node.
    pub rebalance_on_delete: bool,
    /// Remove a deleted key from the membership set.
    pub forget_deleted_keys: bool,
}

impl Config {
    /// Deletion neither rebalances nor touches the membership set.
    pub fn reference() -> Self {
        Config {
            rebalance_on_delete: false,
            forget_deleted_keys: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rebalance_on_delete: true,
            forget_deleted_keys: true,
        }
    }
}
