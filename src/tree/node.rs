//! Tree node representation and rotation primitives
//!
//! Node = key + cached subtree height + two owned child slots
//!   Leaf height: 1
//!   Absent child height: 0
//!
//! Each node exclusively owns its children through boxed optional
//! links, so the structure is a strict tree by construction: no
//! sharing, no cycles, no back-pointers.

/// Owned child slot: absent, or a uniquely-owned subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// One tree vertex.
#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    /// Height of the subtree rooted here; kept in sync on every
    /// structural change rather than recomputed on demand.
    pub(crate) height: i32,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    /// Create a fresh leaf holding `key`.
    pub(crate) fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            height: 1,
            left: None,
            right: None,
        })
    }

    /// Height of an optional subtree (0 when absent).
    #[inline]
    pub(crate) fn height_of(link: &Link<K>) -> i32 {
        link.as_deref().map_or(0, |node| node.height)
    }

    /// Recompute this node's height from its children.
    ///
    /// Must be called after any child reassignment, children first:
    /// a parent's height is only valid once both subtrees are.
    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + Self::height_of(&self.left).max(Self::height_of(&self.right));
    }

    /// Balance factor: `height(left) - height(right)`.
    #[inline]
    pub(crate) fn balance_factor(&self) -> i32 {
        Self::height_of(&self.left) - Self::height_of(&self.right)
    }

    /// Single right rotation.
    ///
    /// ```text
    ///       z              y
    ///      / \            / \
    ///     y  T4   =>     x   z
    ///    / \                / \
    ///   x  T3              T3 T4
    /// ```
    ///
    /// Pure relinking: no key is compared or moved between nodes.
    /// `z` is re-heighted before `y` because `y`'s new height depends
    /// on the freshly demoted `z`.
    pub(crate) fn rotate_right(mut z: Box<Self>) -> Box<Self> {
        let mut y = z.left.take().expect("rotate_right requires a left child");
        z.left = y.right.take();
        z.update_height();
        y.right = Some(z);
        y.update_height();
        y
    }

    /// Single left rotation; mirror image of [`Node::rotate_right`].
    pub(crate) fn rotate_left(mut z: Box<Self>) -> Box<Self> {
        let mut y = z.right.take().expect("rotate_left requires a right child");
        z.right = y.left.take();
        z.update_height();
        y.left = Some(z);
        y.update_height();
        y
    }
}
