use core::fmt;

use super::WBTreeSet;

/// A printable outline of a set's tree, one node per line in pre-order.
///
/// Each line holds `[ value ]`, indented by three `-` per level of depth. A node with a
/// single child prints ` nil` in place of the missing one. An empty set prints a single
/// ` nil` line.
///
/// This `struct` is created by the [`outline`] method on [`WBTreeSet`].
///
/// [`outline`]: WBTreeSet::outline
pub struct Outline<'a, T> {
    set: &'a WBTreeSet<T>,
}

impl<T> WBTreeSet<T> {
    /// Returns the number of edges on the longest path from the root to a leaf, or `None`
    /// for an empty set.
    ///
    /// The weight-balance rule keeps this within a small constant factor of `log2(len)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let mut set = WBTreeSet::new();
    /// assert_eq!(set.height(), None);
    /// set.insert(1);
    /// assert_eq!(set.height(), Some(0));
    ///
    /// let set: WBTreeSet<u32> = (0..1000).collect();
    /// assert!(set.height().unwrap() < 25);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> Option<usize> {
        self.tree.height()
    }

    /// Returns the number of nodes that have no children.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.tree.leaf_count()
    }

    /// Returns the number of nodes exactly `level` edges below the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let set = WBTreeSet::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]).unwrap();
    /// assert_eq!(set.count_at_level(0), 1);
    /// assert_eq!(set.count_at_level(2), 4);
    /// assert_eq!(set.leaf_count(), 4);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn count_at_level(&self, level: usize) -> usize {
        self.tree.count_at_level(level)
    }

    /// Returns a value that displays the tree's shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let set = WBTreeSet::from_sorted(vec![1, 2, 3]).unwrap();
    /// assert_eq!(set.outline().to_string(), "[ 2 ]\n---[ 1 ]\n---[ 3 ]\n");
    /// ```
    pub fn outline(&self) -> Outline<'_, T>
    where
        T: fmt::Display,
    {
        Outline { set: self }
    }
}

impl<T: fmt::Display> fmt::Display for Outline<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.set.tree.fmt_outline(f)
    }
}

impl<T> Clone for Outline<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Outline<'_, T> {}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::WBTreeSet;
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    #[test]
    fn outline_after_skewed_inserts() {
        // The third ascending insert rebuilds the root around 2; the fourth hangs off 3.
        let set: WBTreeSet<i32> = (1..=4).collect();
        let expected = "\
[ 2 ]
---[ 1 ]
---[ 3 ]
------ nil
------[ 4 ]
";
        assert_eq!(set.outline().to_string(), expected);
    }

    #[test]
    fn empty_outline() {
        let set: WBTreeSet<i32> = WBTreeSet::new();
        assert_eq!(set.outline().to_string(), " nil\n");
        assert_eq!(set.leaf_count(), 0);
    }
}
