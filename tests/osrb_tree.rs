use core::cmp::Ordering;

use osrb_tree::{Color, NodeRef, OSRBTree, Rank, RankError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of keys inserted by the larger randomized tests.
const TEST_SIZE: usize = 5_000;

/// Generates keys in a range narrow enough to guarantee duplicates.
fn key_strategy() -> impl Strategy<Value = i64> {
    -1_000i64..1_000i64
}

// ─── Structural validation through the public traversal API ──────────────────

/// Walks a subtree checking BST order, coloring, and size fields.
/// Returns (black_height, node_count, height).
fn check_subtree<T: Ord>(node: NodeRef<'_, T>) -> (usize, usize, usize) {
    let (mut left_black, mut left_count, mut left_height) = (0, 0, 0);
    if let Some(left) = node.left() {
        // Equal keys enter to the right but rotations may move an earlier tie
        // into a left child, so the left bound admits equality.
        assert!(left.key() <= node.key(), "left subtree key out of order");
        if node.color() == Color::Red {
            assert_eq!(left.color(), Color::Black, "red node has a red left child");
        }
        (left_black, left_count, left_height) = check_subtree(left);
    }

    let (mut right_black, mut right_count, mut right_height) = (0, 0, 0);
    if let Some(right) = node.right() {
        assert!(right.key() >= node.key(), "right subtree key out of order");
        if node.color() == Color::Red {
            assert_eq!(right.color(), Color::Black, "red node has a red right child");
        }
        (right_black, right_count, right_height) = check_subtree(right);
    }

    assert_eq!(left_black, right_black, "black-height differs between children");
    let count = 1 + left_count + right_count;
    assert_eq!(node.size(), count, "size field does not match subtree cardinality");

    let black = left_black + usize::from(node.color() == Color::Black);
    (black, count, 1 + left_height.max(right_height))
}

/// Asserts every red-black and size invariant, plus the height bound
/// `height <= 2 * log2(n + 1)`.
fn assert_valid<T: Ord>(tree: &OSRBTree<T>) {
    let Some(root) = tree.root() else {
        assert_eq!(tree.len(), 0);
        return;
    };

    assert_eq!(root.color(), Color::Black, "root must be black");
    let (_, count, height) = check_subtree(root);
    assert_eq!(count, tree.len());

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let bound = (2.0 * ((count + 1) as f64).log2()).ceil() as usize;
    assert!(height <= bound, "height {height} exceeds red-black bound {bound} for {count} nodes");
}

// ─── Fixed scenarios ─────────────────────────────────────────────────────────

/// The 18-key sequence with a known 6th order statistic.
const SEQUENCE: [i32; 18] = [12, 38, 10, 36, 8, 34, 6, 32, 4, 30, 2, 28, 16, 26, 18, 14, 22, 24];

#[test]
fn known_sequence_sixth_statistic() {
    let mut tree = OSRBTree::new();
    for key in SEQUENCE {
        tree.insert(key);
        assert_valid(&tree);
    }

    assert_eq!(tree.len(), 18);
    assert_eq!(tree.order_statistic(6), Ok(&12));
    assert_eq!(tree[Rank(6)], 12);
}

#[test]
fn single_element_tree() {
    let tree = OSRBTree::with_root(20);

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.order_statistic(1), Ok(&20));
    assert_eq!(tree.order_statistic(2), Err(RankError { rank: 2, len: 1 }));
    assert_eq!(tree.root().unwrap().color(), Color::Black);
}

#[test]
fn empty_tree_rejects_every_rank() {
    let tree: OSRBTree<i32> = OSRBTree::new();

    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    for rank in [0, 1, 2, 100] {
        assert_eq!(tree.order_statistic(rank), Err(RankError { rank, len: 0 }));
    }
}

#[test]
fn out_of_range_ranks_are_errors() {
    let tree: OSRBTree<i32> = (1..=10).collect();

    assert_eq!(tree.order_statistic(0), Err(RankError { rank: 0, len: 10 }));
    assert_eq!(tree.order_statistic(11), Err(RankError { rank: 11, len: 10 }));
    assert_eq!(tree.order_statistic(1), Ok(&1));
    assert_eq!(tree.order_statistic(10), Ok(&10));
}

#[test]
#[should_panic(expected = "rank out of bounds")]
fn rank_indexing_panics_out_of_range() {
    let tree = OSRBTree::from([1, 2, 3]);
    let _ = tree[Rank(4)];
}

#[test]
fn ascending_then_descending_runs_stay_valid() {
    // Monotone runs force left rotations, then right rotations.
    let mut tree = OSRBTree::new();
    for key in 0..100 {
        tree.insert(key);
        assert_valid(&tree);
    }
    for key in (100..200).rev() {
        tree.insert(key);
        assert_valid(&tree);
    }

    assert_eq!(tree.len(), 200);
    for rank in 1..=200 {
        assert_eq!(tree.order_statistic(rank), Ok(&(rank as i32 - 1)));
    }
}

#[test]
fn clear_resets_and_tree_is_reusable() {
    let mut tree = OSRBTree::from([5, 3, 8]);
    tree.clear();

    assert!(tree.is_empty());
    assert_eq!(tree.order_statistic(1), Err(RankError { rank: 1, len: 0 }));

    tree.insert(42);
    assert_eq!(tree.order_statistic(1), Ok(&42));
    assert_valid(&tree);
}

#[test]
fn debug_formats_in_order() {
    let tree = OSRBTree::from([3, 1, 2]);
    assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
}

#[test]
fn with_capacity_reserves_node_storage() {
    let tree: OSRBTree<i32> = OSRBTree::with_capacity(64);
    assert_eq!(tree.capacity(), 64);
    assert!(tree.is_empty());
}

#[test]
fn traversal_is_read_only_and_consistent() {
    let tree = OSRBTree::from([2, 1, 3]);
    let root = tree.root().unwrap();

    assert_eq!(*root.key(), 2);
    assert_eq!(root.size(), 3);
    assert_eq!(*root.left().unwrap().key(), 1);
    assert_eq!(*root.right().unwrap().key(), 3);
    assert!(root.left().unwrap().left().is_none());
}

// ─── Duplicate ordering ──────────────────────────────────────────────────────

/// A key whose ordering ignores the tag, so equal keys stay distinguishable.
#[derive(Debug, Eq, PartialEq)]
struct Tagged {
    key: i64,
    tag: usize,
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[test]
fn tie_promoted_by_rotation_stays_valid() {
    // Three equal keys chain to the right; fixup rotates the middle one up,
    // leaving the first tie as a left child of an equal key.
    let mut tree = OSRBTree::new();
    for _ in 0..3 {
        tree.insert(7);
        assert_valid(&tree);
    }

    assert_eq!(tree.len(), 3);
    let root = tree.root().unwrap();
    assert_eq!(*root.left().unwrap().key(), 7);
    for rank in 1..=3 {
        assert_eq!(tree.order_statistic(rank), Ok(&7));
    }
}

#[test]
fn ties_rank_in_insertion_order() {
    let mut tree = OSRBTree::new();
    for tag in 0..8 {
        tree.insert(Tagged { key: 5, tag });
    }
    tree.insert(Tagged { key: 1, tag: 100 });
    tree.insert(Tagged { key: 9, tag: 101 });

    assert_eq!(tree.order_statistic(1).unwrap().tag, 100);
    for rank in 2..=9 {
        // An equal key descends right, so earlier ties keep lower ranks.
        assert_eq!(tree.order_statistic(rank).unwrap().tag, rank - 2);
    }
    assert_eq!(tree.order_statistic(10).unwrap().tag, 101);
}

// ─── Randomized model tests ──────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Inserts a random sequence and checks every invariant after each step.
    #[test]
    fn invariants_hold_after_every_insertion(keys in proptest::collection::vec(key_strategy(), 0..300)) {
        let mut tree = OSRBTree::new();
        for key in keys {
            tree.insert(key);
            assert_valid(&tree);
        }
    }

    /// `order_statistic(k)` matches the k-th element of the sorted inserted
    /// sequence for every valid k, and errors just outside the range.
    #[test]
    fn order_statistic_matches_sorted_model(keys in proptest::collection::vec(key_strategy(), 0..TEST_SIZE)) {
        let tree: OSRBTree<i64> = keys.iter().copied().collect();
        let mut model = keys;
        model.sort_unstable();

        prop_assert_eq!(tree.len(), model.len());
        for (index, expected) in model.iter().enumerate() {
            prop_assert_eq!(tree.order_statistic(index + 1), Ok(expected));
        }

        let len = model.len();
        prop_assert_eq!(tree.order_statistic(0), Err(RankError { rank: 0, len }));
        prop_assert_eq!(tree.order_statistic(len + 1), Err(RankError { rank: len + 1, len }));
    }

    /// In-order iteration yields the sorted multiset of inserted keys.
    #[test]
    fn iteration_matches_sorted_model(keys in proptest::collection::vec(key_strategy(), 0..TEST_SIZE)) {
        let tree: OSRBTree<i64> = keys.iter().copied().collect();
        let mut model = keys;
        model.sort_unstable();

        let items: Vec<i64> = tree.iter().copied().collect();
        prop_assert_eq!(items, model);
        prop_assert_eq!(tree.iter().len(), tree.len());
    }

    /// The end state of a large insertion burst satisfies all invariants,
    /// including the height bound.
    #[test]
    fn invariants_hold_at_scale(keys in proptest::collection::vec(key_strategy(), 0..TEST_SIZE)) {
        let tree: OSRBTree<i64> = keys.into_iter().collect();
        assert_valid(&tree);
    }

    /// Cloning preserves the contents and leaves the original untouched.
    #[test]
    fn clone_is_independent(keys in proptest::collection::vec(key_strategy(), 1..500)) {
        let tree: OSRBTree<i64> = keys.iter().copied().collect();
        let mut cloned = tree.clone();
        cloned.insert(i64::MAX);

        prop_assert_eq!(cloned.len(), tree.len() + 1);
        for rank in 1..=tree.len() {
            prop_assert_eq!(tree.order_statistic(rank), cloned.order_statistic(rank));
        }
        assert_valid(&tree);
        assert_valid(&cloned);
    }
}
