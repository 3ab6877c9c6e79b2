//! Self-balancing AVL tree
//!
//! Ordered container keyed by any totally-ordered type. Insertion
//! rebalances on the way back up the recursion, so after every call
//! the tree satisfies, at every node:
//!
//! 1. BST order: left subtree < key < right subtree
//! 2. Height correctness: `height = 1 + max(left, right)`
//! 3. Balance: `|height(left) - height(right)| <= 1`
//!
//! Balanced height keeps every operation O(log n). There is no
//! delete; duplicate inserts are silent no-ops.

mod node;
mod traversal;

pub use traversal::{InOrder, NodeRef};

use std::cmp::Ordering;

use tracing::trace;

use node::{Link, Node};

/// Mutable ordered set of keys backed by an AVL tree.
///
/// The tree owns all of its nodes transitively through the root link;
/// nodes are created only by [`AvlTree::insert`] and live until the
/// tree is dropped. Exclusive ownership of every child slot keeps the
/// structure acyclic by construction.
#[derive(Debug, Clone)]
pub struct AvlTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K: Ord> AvlTree<K> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert `key`, rebalancing as needed.
    ///
    /// Returns `true` if the key was newly inserted, `false` if it was
    /// already present (in which case the tree is left untouched).
    /// Insertion never fails; callers that only care about the
    /// original fire-and-forget contract can ignore the return value.
    pub fn insert(&mut self, key: K) -> bool {
        let (root, _, inserted) = Self::insert_at(self.root.take(), key);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Recursive insertion into an owned subtree slot.
    ///
    /// Takes ownership of the slot and returns the replacement root,
    /// so the caller reassigns its own child link with whatever comes
    /// back (possibly a rotated subtree).
    ///
    /// The middle element of the return value is how the inserted key
    /// compared against this subtree's root at entry. The parent frame
    /// needs that comparison to pick between the single- and
    /// double-rotation cases, but by then the key itself has been
    /// moved into the tree, so it is captured here and handed up one
    /// level. Only the lowest unbalanced ancestor ever rotates, so no
    /// subtree root has changed underneath the comparison by the time
    /// it is consulted.
    fn insert_at(slot: Link<K>, key: K) -> (Box<Node<K>>, Ordering, bool) {
        let Some(mut node) = slot else {
            // Past an absent slot: the key becomes a fresh leaf, and
            // the parent's comparison against it is trivially Equal.
            return (Node::leaf(key), Ordering::Equal, true);
        };

        let entry = key.cmp(&node.key);
        match entry {
            Ordering::Less => {
                let (child, towards, inserted) = Self::insert_at(node.left.take(), key);
                node.left = Some(child);
                node.update_height();
                (Self::rebalance(node, towards), entry, inserted)
            }
            Ordering::Greater => {
                let (child, towards, inserted) = Self::insert_at(node.right.take(), key);
                node.right = Some(child);
                node.update_height();
                (Self::rebalance(node, towards), entry, inserted)
            }
            // Key already present: silent no-op, subtree unchanged.
            Ordering::Equal => (node, entry, false),
        }
    }

    /// Restore the balance invariant at `node` after an insertion into
    /// one of its subtrees grew that subtree's height.
    ///
    /// `inserted` is how the inserted key compared against the root of
    /// the grown child; it selects the imbalance shape directly rather
    /// than re-inspecting child balance factors.
    fn rebalance(mut node: Box<Node<K>>, inserted: Ordering) -> Box<Node<K>> {
        let balance = node.balance_factor();
        if balance > 1 {
            match inserted {
                Ordering::Less => {
                    trace!(balance, "left-left imbalance, rotating right");
                    Node::rotate_right(node)
                }
                Ordering::Greater => {
                    trace!(balance, "left-right imbalance, rotating left then right");
                    let left = node.left.take().expect("left-heavy node has a left child");
                    node.left = Some(Node::rotate_left(left));
                    Node::rotate_right(node)
                }
                // A duplicate insert never changes any height, so an
                // Equal comparison cannot coincide with an imbalance.
                Ordering::Equal => unreachable!("imbalance without subtree growth"),
            }
        } else if balance < -1 {
            match inserted {
                Ordering::Greater => {
                    trace!(balance, "right-right imbalance, rotating left");
                    Node::rotate_left(node)
                }
                Ordering::Less => {
                    trace!(balance, "right-left imbalance, rotating right then left");
                    let right = node
                        .right
                        .take()
                        .expect("right-heavy node has a right child");
                    node.right = Some(Node::rotate_right(right));
                    Node::rotate_left(node)
                }
                Ordering::Equal => unreachable!("imbalance without subtree growth"),
            }
        } else {
            node
        }
    }

    /// Greatest key in the tree, or `None` when empty.
    ///
    /// The rightmost node holds the maximum; this is plain BST
    /// structure with no AVL-specific logic.
    pub fn find_max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Smallest key in the tree, or `None` when empty.
    pub fn find_min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Whether `key` is present, via standard BST search.
    pub fn contains(&self, key: &K) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }
}

impl<K> AvlTree<K> {
    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree (0 when empty, 1 for a single key).
    pub fn height(&self) -> usize {
        Node::height_of(&self.root) as usize
    }

    /// Read-only handle to the root node, if any.
    ///
    /// Entry point for external renderers: from here the whole
    /// structure is reachable through [`NodeRef::left`] and
    /// [`NodeRef::right`], with no way to mutate it.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.as_deref().map(NodeRef::new)
    }

    /// Iterate over the keys in ascending order.
    pub fn iter(&self) -> InOrder<'_, K> {
        InOrder::new(self.root.as_deref(), self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_queries() {
        let tree: AvlTree<i64> = AvlTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.find_max(), None);
        assert_eq!(tree.find_min(), None);
        assert!(tree.root().is_none());
    }

    #[test]
    fn single_insert_becomes_root_leaf() {
        let mut tree = AvlTree::new();
        assert!(tree.insert(42));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.find_max(), Some(&42));
        assert_eq!(tree.find_min(), Some(&42));
    }

    #[test]
    fn duplicate_insert_is_a_noop() {
        let mut tree = AvlTree::new();
        assert!(tree.insert(7));
        assert!(!tree.insert(7));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn contains_finds_every_inserted_key() {
        let mut tree = AvlTree::new();
        for key in [50, 30, 70, 20, 40] {
            tree.insert(key);
        }
        for key in [50, 30, 70, 20, 40] {
            assert!(tree.contains(&key));
        }
        assert!(!tree.contains(&99));
    }

    #[test]
    fn iter_yields_ascending_order() {
        let mut tree = AvlTree::new();
        for key in [5, 1, 4, 2, 3] {
            tree.insert(key);
        }
        let keys: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(keys, vec![1, 2, 3, 4, 5]);
        assert_eq!(tree.iter().len(), 5);
    }

    #[test]
    fn rotations_never_change_keys() {
        let mut tree = AvlTree::new();
        // Ascending insert forces a rotation at every other step.
        for key in 1..=64 {
            tree.insert(key);
        }
        assert_eq!(tree.len(), 64);
        let keys: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(keys, (1..=64).collect::<Vec<_>>());
    }
}
