use thiserror::Error;

/// A one-based rank into the sorted order of a tree.
///
/// `Rank(1)` is the smallest element, `Rank(len)` the largest, matching the
/// usual statistics convention for the k-th order statistic.
///
/// # Examples
///
/// ```
/// use osrb_tree::{OSRBTree, Rank};
///
/// let tree = OSRBTree::from([30, 10, 20]);
/// assert_eq!(tree[Rank(1)], 10);
/// assert_eq!(tree[Rank(3)], 30);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);

/// The error returned by [`order_statistic`] when the requested rank is
/// outside `1..=len`.
///
/// On an empty tree every rank is out of range.
///
/// [`order_statistic`]: crate::OSRBTree::order_statistic
///
/// # Examples
///
/// ```
/// use osrb_tree::{OSRBTree, RankError};
///
/// let tree = OSRBTree::from([10, 20]);
/// assert_eq!(tree.order_statistic(0), Err(RankError { rank: 0, len: 2 }));
/// assert_eq!(tree.order_statistic(3), Err(RankError { rank: 3, len: 2 }));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("rank {rank} is outside the valid range 1..={len}")]
pub struct RankError {
    /// The requested rank.
    pub rank: usize,
    /// The number of elements in the tree at the time of the query.
    pub len: usize,
}
