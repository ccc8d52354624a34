//! A weight-balanced order-statistic set for Rust.
//!
//! This crate provides [`WBTreeSet`], an ordered set backed by a binary search tree whose
//! nodes count the elements in both of their subtrees. The counters answer rank queries
//! by walking a single root-to-leaf path:
//!
//! - [`select`](WBTreeSet::select) - Get the i-th smallest element (1-based)
//! - [`rank_of`](WBTreeSet::rank_of) - Get the 1-based position of an element
//! - [`count_geq`](WBTreeSet::count_geq) / [`count_leq`](WBTreeSet::count_leq) - Count the
//!   elements on either side of a value
//! - [`count_range`](WBTreeSet::count_range) - Count the elements in a closed range
//!
//! # Example
//!
//! ```
//! use wb_rank_tree::WBTreeSet;
//!
//! let mut set = WBTreeSet::new();
//! for value in [5, 2, 8, 1, 9, 3] {
//!     set.insert(value);
//! }
//!
//! // Standard set operations
//! assert!(set.contains(&8));
//! assert_eq!(set.len(), 6);
//!
//! // Order-statistic operations (O(height))
//! assert_eq!(set.select(4), Some(&5));
//! assert_eq!(set.count_geq(&5), 3);
//! assert_eq!(set.count_leq(&3), 3);
//! assert_eq!(set.count_range(&2, &8), 4);
//! ```
//!
//! # Implementation
//!
//! Nodes live in an index arena and refer to their children by handle. After an insertion
//! or removal changes a node's counters, the node checks that neither subtree holds more
//! than twice the other plus one. When one does, the node's whole subtree is flattened in
//! order and rebuilt as a minimum-height tree. A subtree of `k` nodes can only fall out of
//! balance after `O(k)` updates below it, so the rebuilds cost amortized `O(log n)` per
//! update and the height stays logarithmic.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;

pub mod wbtree_set;

pub use error::Error;
pub use wbtree_set::WBTreeSet;
