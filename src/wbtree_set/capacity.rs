use super::WBTreeSet;
use crate::raw::RawWBTree;

impl<T> WBTreeSet<T> {
    /// Creates an empty set with room for at least `capacity` elements before the node
    /// arena reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let set: WBTreeSet<i32> = WBTreeSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        WBTreeSet {
            tree: RawWBTree::with_capacity(capacity),
        }
    }

    /// Returns the number of elements the set can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }

    /// Reserves room for at least `additional` more elements.
    ///
    /// Slots freed by earlier removals count toward the reservation.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let mut set = WBTreeSet::from([1]);
    /// set.reserve(10);
    /// assert!(set.capacity() >= 11);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.tree.reserve(additional);
    }

    /// Shrinks the node arena as much as the positions of the live nodes allow.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let mut set: WBTreeSet<i32> = WBTreeSet::with_capacity(100);
    /// set.insert(1);
    /// set.shrink_to_fit();
    /// assert!(set.capacity() >= 1);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.tree.shrink_to_fit();
    }
}
