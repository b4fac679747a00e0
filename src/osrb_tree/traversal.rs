use super::OSRBTree;
use crate::raw::{Color, Handle, RawOSRBTree};

/// A read-only view of one tree node, for structural inspection.
///
/// A `NodeRef` exposes the node's key, color, and subtree size, and can step
/// to either child. It grants no mutable access, so a consumer (say, a
/// renderer) can walk the whole structure without being able to break any
/// invariant.
///
/// # Examples
///
/// ```
/// use osrb_tree::{Color, OSRBTree};
///
/// let tree = OSRBTree::from([2, 1, 3]);
/// let root = tree.root().unwrap();
///
/// assert_eq!(root.color(), Color::Black);
/// assert_eq!(root.size(), 3);
/// assert_eq!(*root.key(), 2);
/// assert_eq!(*root.left().unwrap().key(), 1);
/// assert_eq!(*root.right().unwrap().key(), 3);
/// ```
pub struct NodeRef<'a, T> {
    tree: &'a RawOSRBTree<T>,
    handle: Handle,
}

impl<T> OSRBTree<T> {
    /// Returns a read-only view of the root node, or `None` if the tree is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTree;
    ///
    /// let tree: OSRBTree<i32> = OSRBTree::new();
    /// assert!(tree.root().is_none());
    ///
    /// let tree = OSRBTree::with_root(20);
    /// assert_eq!(*tree.root().unwrap().key(), 20);
    /// ```
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.raw().root().map(|handle| NodeRef {
            tree: self.raw(),
            handle,
        })
    }
}

impl<'a, T> NodeRef<'a, T> {
    /// Returns a reference to this node's key.
    #[must_use]
    pub fn key(&self) -> &'a T {
        &self.tree.node(self.handle).key
    }

    /// Returns this node's color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.tree.node(self.handle).color
    }

    /// Returns the number of nodes in the subtree rooted here, including this
    /// node.
    #[must_use]
    pub fn size(&self) -> usize {
        self.tree.node(self.handle).size.to_usize()
    }

    /// Returns a view of the left child, if present.
    #[must_use]
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.tree.node(self.handle).left.map(|handle| NodeRef {
            tree: self.tree,
            handle,
        })
    }

    /// Returns a view of the right child, if present.
    #[must_use]
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.tree.node(self.handle).right.map(|handle| NodeRef {
            tree: self.tree,
            handle,
        })
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}
