/// Failures reported by the `try_*` operations of [`WBTreeSet`](crate::WBTreeSet).
///
/// The plain operations report the same outcomes as `bool`, `Option` or a zero count; these
/// variants exist for callers that want to propagate them with `?`.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    /// An equal value is already in the set.
    #[error("an equal value is already in the set")]
    Duplicate,
    /// No equal value is in the set, or the set is empty.
    #[error("no matching value in the set")]
    NotFound,
    /// A rank outside `1..=len` was requested.
    #[error("rank {rank} is outside 1..={len}")]
    RankOutOfRange {
        /// The requested 1-based rank.
        rank: usize,
        /// The number of elements in the set.
        len: usize,
    },
    /// A range whose upper bound is below its lower bound.
    #[error("range upper bound is below its lower bound")]
    InvertedRange,
    /// Input that should have been strictly ascending was not.
    #[error("value at position {position} is not greater than its predecessor")]
    Unsorted {
        /// Index of the first value that breaks the ascending order.
        position: usize,
    },
}
