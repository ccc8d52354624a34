use alloc::vec::Vec;

use super::WBTreeSet;
use crate::Error;
use crate::raw::RawWBTree;

impl<T: Ord> WBTreeSet<T> {
    /// Builds a minimum-height set from strictly ascending values.
    ///
    /// Every node of the result is perfectly balanced: its two subtrees differ in size by
    /// at most one, and the larger one is on the right.
    ///
    /// # Errors
    ///
    /// [`Error::Unsorted`] naming the first position whose value is not greater than the
    /// one before it. Duplicates are rejected the same way.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::{Error, WBTreeSet};
    ///
    /// let set = WBTreeSet::from_sorted(vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(set.len(), 4);
    /// assert_eq!(set.height(), Some(2));
    ///
    /// assert_eq!(WBTreeSet::from_sorted(vec![1, 3, 2]), Err(Error::Unsorted { position: 2 }));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn from_sorted(values: Vec<T>) -> Result<Self, Error> {
        RawWBTree::from_sorted(values).map(|tree| WBTreeSet { tree })
    }
}

impl<T> WBTreeSet<T> {
    /// Consumes the set and returns its elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([3, 1, 2]);
    /// assert_eq!(set.into_sorted_vec(), [1, 2, 3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.tree.into_sorted_vec()
    }

    /// Returns a copy of the elements in ascending order.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}
