use super::handle::Handle;
use super::size::Size;

/// The color of a tree node.
///
/// Red-black balancing constrains colors so that no root-to-leaf path is more
/// than twice as long as any other: the root is always `Black`, a `Red` node
/// never has a `Red` child, and every path from a node down to an absent child
/// crosses the same number of `Black` nodes. Absent children count as `Black`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A single tree node stored in the arena.
///
/// `left` and `right` are owning links in the sense that each node is reachable
/// from exactly one parent; `parent` is the matching back-link used by fixup
/// and rotation. All three are arena handles, so relinking during a rotation
/// can never dangle.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) key: T,
    pub(crate) color: Color,
    /// Number of nodes in the subtree rooted here, including this one.
    pub(crate) size: Size,
    pub(crate) parent: Option<Handle>,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
}

impl<T> Node<T> {
    /// Creates a detached node of size 1 with the given color and parent.
    pub(crate) const fn new(key: T, color: Color, parent: Option<Handle>) -> Self {
        Self {
            key,
            color,
            size: Size::ONE,
            parent,
            left: None,
            right: None,
        }
    }
}
