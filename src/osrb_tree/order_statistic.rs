use core::ops::Index;

use super::OSRBTree;
use crate::{Rank, RankError};

impl<T> OSRBTree<T> {
    /// Returns the k-th smallest element, one-based: `order_statistic(1)` is
    /// the minimum and `order_statistic(len())` the maximum. Ties are ranked
    /// by insertion order.
    ///
    /// Returns a [`RankError`] if `rank` is outside `1..=len()`; on an empty
    /// tree every rank is out of range.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::{OSRBTree, RankError};
    ///
    /// let tree = OSRBTree::from([30, 10, 20]);
    /// assert_eq!(tree.order_statistic(1), Ok(&10));
    /// assert_eq!(tree.order_statistic(2), Ok(&20));
    /// assert_eq!(tree.order_statistic(4), Err(RankError { rank: 4, len: 3 }));
    /// ```
    pub fn order_statistic(&self, rank: usize) -> Result<&T, RankError> {
        let len = self.len();
        if rank < 1 || rank > len {
            return Err(RankError { rank, len });
        }
        let handle = self.raw().select(rank - 1).expect("order_statistic: rank was validated");
        Ok(&self.raw().node(handle).key)
    }
}

/// Indexes into the tree by one-based rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use osrb_tree::{OSRBTree, Rank};
///
/// let tree = OSRBTree::from([10, 20, 30]);
/// assert_eq!(tree[Rank(2)], 20);
/// ```
impl<T> Index<Rank> for OSRBTree<T> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.order_statistic(rank.0).expect("rank out of bounds")
    }
}
