use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Node};
use super::size::Size;

/// The core red-black tree implementation backing `OSRBTree`.
///
/// Every node carries the size of its subtree, maintained incrementally on
/// insertion and rotation, which is what makes rank selection O(log n).
#[derive(Clone)]
pub(crate) struct RawOSRBTree<T> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<T>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

impl<T> RawOSRBTree<T> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with the specified capacity.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of elements in the tree.
    ///
    /// O(1): the root's subtree size is the whole tree.
    pub(crate) fn len(&self) -> usize {
        self.size_of(self.root)
    }

    /// Returns true if the tree contains no elements.
    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the capacity of the node arena.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Clears all elements from the tree.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the root handle, if any.
    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    /// Returns a reference to a node by handle.
    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<T> {
        self.nodes.get(handle)
    }

    /// Returns the handle of the smallest element, if any.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.leftmost(root))
    }

    /// Returns the handle of the in-order successor of `handle`.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        if let Some(right) = self.nodes.get(handle).right {
            return Some(self.leftmost(right));
        }
        // No right subtree: climb until we leave a left child.
        let mut current = handle;
        loop {
            let parent = self.nodes.get(current).parent?;
            if self.nodes.get(parent).left == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
    }

    fn leftmost(&self, mut current: Handle) -> Handle {
        while let Some(left) = self.nodes.get(current).left {
            current = left;
        }
        current
    }

    /// Returns the size of an optional subtree; an absent child counts 0.
    #[inline]
    fn size_of(&self, node: Option<Handle>) -> usize {
        node.map_or(0, |h| self.nodes.get(h).size.to_usize())
    }

    /// Returns the color of an optional node; an absent node is a black nil.
    #[inline]
    fn color_of(&self, node: Option<Handle>) -> Color {
        node.map_or(Color::Black, |h| self.nodes.get(h).color)
    }

    /// Returns the handle of the element with the given zero-based rank, or
    /// `None` if `rank >= len()`.
    ///
    /// Descends by left-subtree size: a rank inside the left subtree keeps its
    /// value, the node itself answers rank `size(left)`, and a larger rank
    /// drops `size(left) + 1` and continues right.
    pub(crate) fn select(&self, mut rank: usize) -> Option<Handle> {
        if rank >= self.len() {
            return None;
        }
        let mut current = self.root?;

        loop {
            let node = self.nodes.get(current);
            let left_size = self.size_of(node.left);
            if rank < left_size {
                current = node.left.expect("select: left subtree is absent");
            } else if rank == left_size {
                return Some(current);
            } else {
                rank -= left_size + 1;
                current = node.right.expect("select: rank exceeds subtree size");
            }
        }
    }
}

impl<T: Ord> RawOSRBTree<T> {
    /// Inserts a key into the tree. Duplicates are kept, ordered by insertion:
    /// an equal key always descends right, so later insertions rank higher.
    pub(crate) fn insert(&mut self, key: T) {
        let Some(mut current) = self.root else {
            let root = self.nodes.alloc(Node::new(key, Color::Black, None));
            self.root = Some(root);
            return;
        };

        // Allocate before touching any size field: a full arena panics here,
        // before the tree has been modified at all.
        let z = self.nodes.alloc(Node::new(key, Color::Red, None));

        // BST descent. Every visited node's subtree is about to gain one
        // element, so sizes are bumped on the way down.
        let parent = loop {
            self.nodes.get_mut(current).size.increment();
            let key = &self.nodes.get(z).key;
            let node = self.nodes.get(current);
            let next = if *key < node.key { node.left } else { node.right };
            match next {
                Some(child) => current = child,
                None => break current,
            }
        };

        let goes_left = self.nodes.get(z).key < self.nodes.get(parent).key;
        self.nodes.get_mut(z).parent = Some(parent);
        let parent_node = self.nodes.get_mut(parent);
        if goes_left {
            parent_node.left = Some(z);
        } else {
            parent_node.right = Some(z);
        }

        self.insert_fixup(z);
    }

    /// Restores red-black coloring after `z` was attached as a red leaf.
    ///
    /// Works bottom-up while the parent is red. The uncle is the grandparent's
    /// child opposite the parent; when absent it is treated as a black nil
    /// sentinel, never as some other live node.
    fn insert_fixup(&mut self, mut z: Handle) {
        loop {
            let Some(parent) = self.nodes.get(z).parent else { break };
            if self.nodes.get(parent).color == Color::Black {
                break;
            }
            // The root is always black, so a red parent has a parent.
            let grandparent = self
                .nodes
                .get(parent)
                .parent
                .expect("insert_fixup: red node has no parent");
            let parent_is_left = self.nodes.get(grandparent).left == Some(parent);
            let uncle = if parent_is_left {
                self.nodes.get(grandparent).right
            } else {
                self.nodes.get(grandparent).left
            };

            if self.color_of(uncle) == Color::Red {
                // Case 1: red uncle. Recolor and continue from the grandparent.
                let uncle = uncle.expect("insert_fixup: red uncle is absent");
                self.nodes.get_mut(parent).color = Color::Black;
                self.nodes.get_mut(uncle).color = Color::Black;
                self.nodes.get_mut(grandparent).color = Color::Red;
                z = grandparent;
                continue;
            }

            let z_is_inner = if parent_is_left {
                self.nodes.get(parent).right == Some(z)
            } else {
                self.nodes.get(parent).left == Some(z)
            };
            if z_is_inner {
                // Case 2: black uncle, z on the inner side. Rotate the parent
                // to reduce to case 3.
                z = parent;
                if parent_is_left {
                    self.rotate_left(z);
                } else {
                    self.rotate_right(z);
                }
            }

            // Case 3: black uncle, z on the outer side. The parent takes the
            // grandparent's place and its color; the loop exits next round
            // because the new parent is black.
            let parent = self.nodes.get(z).parent.expect("insert_fixup: case 3 parent is absent");
            let grandparent = self
                .nodes
                .get(parent)
                .parent
                .expect("insert_fixup: case 3 grandparent is absent");
            self.nodes.get_mut(parent).color = Color::Black;
            self.nodes.get_mut(grandparent).color = Color::Red;
            if parent_is_left {
                self.rotate_right(grandparent);
            } else {
                self.rotate_left(grandparent);
            }
        }

        // Case 1 may have propagated red all the way up.
        let root = self.root.expect("insert_fixup: tree is empty");
        self.nodes.get_mut(root).color = Color::Black;
    }

    /// Promotes `x`'s right child into `x`'s position.
    ///
    /// The promoted child inherits `x`'s old subtree size unchanged (a rotation
    /// moves no elements in or out of the subtree); `x`'s size is recomputed
    /// from its new children.
    fn rotate_left(&mut self, x: Handle) {
        let y = self.nodes.get(x).right.expect("rotate_left: no right child");
        let inner = self.nodes.get(y).left;

        // The inner subtree switches sides.
        self.nodes.get_mut(x).right = inner;
        if let Some(inner) = inner {
            self.nodes.get_mut(inner).parent = Some(x);
        }

        // y takes x's place under x's parent (or as the root).
        let up = self.nodes.get(x).parent;
        self.nodes.get_mut(y).parent = up;
        match up {
            None => self.root = Some(y),
            Some(up) => {
                let up_node = self.nodes.get_mut(up);
                if up_node.left == Some(x) {
                    up_node.left = Some(y);
                } else {
                    up_node.right = Some(y);
                }
            }
        }

        self.nodes.get_mut(y).left = Some(x);
        self.nodes.get_mut(x).parent = Some(y);

        let x_size = self.nodes.get(x).size;
        self.nodes.get_mut(y).size = x_size;
        let (left, right) = {
            let x_node = self.nodes.get(x);
            (x_node.left, x_node.right)
        };
        self.nodes.get_mut(x).size = Size::from_usize(1 + self.size_of(left) + self.size_of(right));
    }

    /// Promotes `x`'s left child into `x`'s position. Mirror of `rotate_left`.
    fn rotate_right(&mut self, x: Handle) {
        let y = self.nodes.get(x).left.expect("rotate_right: no left child");
        let inner = self.nodes.get(y).right;

        self.nodes.get_mut(x).left = inner;
        if let Some(inner) = inner {
            self.nodes.get_mut(inner).parent = Some(x);
        }

        let up = self.nodes.get(x).parent;
        self.nodes.get_mut(y).parent = up;
        match up {
            None => self.root = Some(y),
            Some(up) => {
                let up_node = self.nodes.get_mut(up);
                if up_node.left == Some(x) {
                    up_node.left = Some(y);
                } else {
                    up_node.right = Some(y);
                }
            }
        }

        self.nodes.get_mut(y).right = Some(x);
        self.nodes.get_mut(x).parent = Some(y);

        let x_size = self.nodes.get(x).size;
        self.nodes.get_mut(y).size = x_size;
        let (left, right) = {
            let x_node = self.nodes.get(x);
            (x_node.left, x_node.right)
        };
        self.nodes.get_mut(x).size = Size::from_usize(1 + self.size_of(left) + self.size_of(right));
    }
}
