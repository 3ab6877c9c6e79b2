//! # Canopy: a self-balancing AVL tree
//!
//! An ordered, mutable container keyed by any totally-ordered type,
//! kept balanced automatically on insertion.
//!
//! ## Core Algorithm
//!
//! 1. **Recursive BST insert**: descend by comparison, create a leaf
//!    past the first absent slot (duplicates are silent no-ops)
//! 2. **Height bookkeeping**: recompute each node's cached height
//!    post-order on the way back up
//! 3. **Rebalancing**: when a node's balance factor leaves ±1, apply
//!    exactly one of the four rotation cases (LL, RR, LR, RL),
//!    selected by where the inserted key landed
//!
//! Result: height stays O(log n), so insert and every query are
//! O(log n).
//!
//! ## Usage Example
//!
//! ```
//! use canopy::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in [50, 30, 70, 20, 40, 60, 80, 90, 10, 55, 75] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.find_max(), Some(&90));
//! assert!(tree.height() <= 4);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules
pub mod tree; // AVL tree: node model, insertion, rebalancing, queries
pub mod util; // Key-list parsing for the CLI harness

// Re-exports for convenience
pub use tree::{AvlTree, InOrder, NodeRef};
