//! Read-only traversal over the tree
//!
//! External consumers (renderers, pretty-printers) walk the structure
//! through borrowed node handles. Handles expose the key, the cached
//! height, and the two child slots; no mutation is reachable from
//! here, and no handle outlives its borrow of the tree.

use super::node::Node;

/// Borrowed, read-only view of one tree node.
///
/// Cheap to copy; the tree stays immutably borrowed for as long as
/// any handle derived from it is alive.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a, K> {
    node: &'a Node<K>,
}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn new(node: &'a Node<K>) -> Self {
        Self { node }
    }

    /// The key stored at this node.
    pub fn key(&self) -> &'a K {
        &self.node.key
    }

    /// Cached height of the subtree rooted here (a leaf has height 1).
    pub fn height(&self) -> usize {
        self.node.height as usize
    }

    /// Left child, if present.
    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.node.left.as_deref().map(NodeRef::new)
    }

    /// Right child, if present.
    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.node.right.as_deref().map(NodeRef::new)
    }
}

/// Ascending in-order iterator over the tree's keys.
///
/// Non-recursive: keeps the left spine of the remaining subtrees on
/// an explicit stack, so iteration uses O(height) auxiliary space.
#[derive(Debug)]
pub struct InOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for InOrder<'_, K> {}
