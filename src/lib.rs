//! Order-statistic red-black tree for Rust.
//!
//! This crate provides [`OSRBTree`], an ordered multiset with O(log n)
//! insertion and O(log n) retrieval of the k-th smallest element:
//!
//! - [`insert`](OSRBTree::insert) - Add a key; duplicates are kept and ranked
//!   by insertion order
//! - [`order_statistic`](OSRBTree::order_statistic) - Get the k-th smallest
//!   element (one-based)
//! - Indexing by [`Rank`] - e.g., `tree[Rank(1)]` for the minimum
//! - [`root`](OSRBTree::root) - Read-only structural traversal (key, color,
//!   subtree size) for inspection or rendering
//!
//! # Example
//!
//! ```
//! use osrb_tree::{OSRBTree, Rank};
//!
//! let mut latencies = OSRBTree::new();
//! latencies.insert(12);
//! latencies.insert(38);
//! latencies.insert(10);
//! latencies.insert(38);
//!
//! // The k-th smallest element (O(log n), one-based).
//! assert_eq!(latencies.order_statistic(1), Ok(&10));
//! assert_eq!(latencies.order_statistic(3), Ok(&38));
//!
//! // An out-of-range rank is an error, not a panic.
//! assert!(latencies.order_statistic(5).is_err());
//!
//! // Index by rank when panicking on a bad rank is acceptable.
//! assert_eq!(latencies[Rank(2)], 12);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library
//!   dependency
//! - **O(log n) rank queries** - Every node carries its subtree size,
//!   maintained incrementally through insertions and rotations
//! - **Arena storage** - Nodes live in a dense arena and link to each other by
//!   index, so there is no pointer rewiring to get wrong and teardown is one
//!   flat deallocation
//!
//! # Implementation
//!
//! The tree is a classic red-black tree (CLRS-style insert fixup with
//! recoloring and rotations) augmented with subtree sizes. Sizes are bumped
//! along the descent path during insertion and patched locally by each
//! rotation, so rank queries never trigger a recomputation pass. There is no
//! delete operation; the arena is insert-only.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

extern crate alloc;

mod order_statistic;
mod raw;

pub mod osrb_tree;

pub use order_statistic::{Rank, RankError};
pub use osrb_tree::{NodeRef, OSRBTree};
pub use raw::Color;
