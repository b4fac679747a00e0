use core::fmt;
use core::iter::FusedIterator;

use crate::raw::{Handle, RawOSRBTree};

mod capacity;
mod order_statistic;
mod traversal;

pub use traversal::NodeRef;

/// An ordered multiset based on a red-black tree with subtree-size
/// augmentation.
///
/// Insertion is O(log n), and so is retrieving the k-th smallest element via
/// [`order_statistic`](OSRBTree::order_statistic). Equal keys are all kept:
/// a duplicate is inserted into the right subtree of its first tie, so ties
/// are ordered by insertion.
///
/// There is no remove operation. Nodes are created by insertion only and are
/// freed all at once when the tree is dropped or [`clear`](OSRBTree::clear)ed;
/// internally they live in a dense arena addressed by indices, so the tree
/// never manipulates raw pointers.
///
/// It is a logic error for a key to be modified in such a way that its
/// ordering relative to any other key, as determined by the [`Ord`] trait,
/// changes while it is in the tree. This is normally only possible through
/// [`Cell`], [`RefCell`], global state, I/O, or unsafe code. The behavior
/// resulting from such a logic error is not specified, but will not result in
/// undefined behavior.
///
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
///
/// # Examples
///
/// ```
/// use osrb_tree::OSRBTree;
///
/// let mut heights = OSRBTree::new();
///
/// heights.insert(183);
/// heights.insert(165);
/// heights.insert(172);
/// heights.insert(165);
///
/// // The k-th smallest element, one-based.
/// assert_eq!(heights.order_statistic(1), Ok(&165));
/// assert_eq!(heights.order_statistic(3), Ok(&172));
/// assert_eq!(heights.len(), 4);
///
/// // In-order iteration visits keys in sorted order, duplicates included.
/// let sorted: Vec<_> = heights.iter().copied().collect();
/// assert_eq!(sorted, [165, 165, 172, 183]);
/// ```
#[derive(Clone)]
pub struct OSRBTree<T> {
    raw: RawOSRBTree<T>,
}

/// An in-order iterator over the elements of an `OSRBTree`.
///
/// This `struct` is created by the [`iter`] method on [`OSRBTree`]. See its
/// documentation for more.
///
/// # Examples
///
/// ```
/// use osrb_tree::OSRBTree;
///
/// let tree = OSRBTree::from([3, 1, 2]);
/// let mut iter = tree.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: OSRBTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    tree: &'a RawOSRBTree<T>,
    next: Option<Handle>,
    remaining: usize,
}

impl<T> OSRBTree<T> {
    /// Creates an empty tree.
    ///
    /// Does not allocate until the first insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTree;
    ///
    /// let tree: OSRBTree<i32> = OSRBTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raw: RawOSRBTree::new(),
        }
    }

    /// Returns the number of elements in the tree.
    ///
    /// # Complexity
    ///
    /// O(1) - the root node carries the size of the whole tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTree;
    ///
    /// let tree = OSRBTree::from([10, 20, 20]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the tree contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTree;
    ///
    /// let mut tree = OSRBTree::new();
    /// assert!(tree.is_empty());
    /// tree.insert(7);
    /// assert!(!tree.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes all elements from the tree, keeping the allocated node storage
    /// for reuse.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTree;
    ///
    /// let mut tree = OSRBTree::from([1, 2, 3]);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns an iterator visiting the elements in ascending order.
    ///
    /// Duplicate keys are visited once per insertion. The iterator walks
    /// parent links instead of keeping a path stack, so it does not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTree;
    ///
    /// let tree = OSRBTree::from([2, 3, 1, 2]);
    /// let items: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(items, [1, 2, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: &self.raw,
            next: self.raw.first(),
            remaining: self.raw.len(),
        }
    }

    pub(crate) fn raw(&self) -> &RawOSRBTree<T> {
        &self.raw
    }
}

impl<T: Ord> OSRBTree<T> {
    /// Creates a tree holding a single element as its black root.
    ///
    /// Equivalent to inserting `key` into a fresh empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTree;
    ///
    /// let tree = OSRBTree::with_root(20);
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.order_statistic(1), Ok(&20));
    /// ```
    #[must_use]
    pub fn with_root(key: T) -> Self {
        let mut tree = Self::new();
        tree.insert(key);
        tree
    }

    /// Inserts a key into the tree.
    ///
    /// Never fails and never replaces: a key equal to one already present is
    /// kept as a distinct element, ranked after its earlier ties.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTree;
    ///
    /// let mut tree = OSRBTree::new();
    /// tree.insert(5);
    /// tree.insert(5);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T) {
        self.raw.insert(key);
    }
}

impl<T> Default for OSRBTree<T> {
    /// Creates an empty tree.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for OSRBTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for OSRBTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OSRBTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OSRBTree<T> {
    /// Builds a tree from an array of keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTree;
    ///
    /// let tree = OSRBTree::from([3, 1, 2]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    fn from(keys: [T; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a OSRBTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let handle = self.next?;
        self.next = self.tree.successor(handle);
        self.remaining -= 1;
        Some(&self.tree.node(handle).key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            next: self.next,
            remaining: self.remaining,
        }
    }
}
