use core::borrow::Borrow;

use super::WBTreeSet;
use crate::Error;

impl<T> WBTreeSet<T> {
    /// Returns the `rank`-th smallest element, counting from 1.
    ///
    /// Returns `None` when `rank` is 0 or greater than [`len`](WBTreeSet::len).
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([5, 2, 8, 1, 9, 3]);
    /// assert_eq!(set.select(1), Some(&1));
    /// assert_eq!(set.select(4), Some(&5));
    /// assert_eq!(set.select(6), Some(&9));
    /// assert_eq!(set.select(0), None);
    /// assert_eq!(set.select(7), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[doc(alias = "nth")]
    #[must_use]
    pub fn select(&self, rank: usize) -> Option<&T> {
        self.tree.select(rank)
    }

    /// Returns the `rank`-th smallest element, counting from 1.
    ///
    /// # Errors
    ///
    /// [`Error::RankOutOfRange`] when `rank` is outside `1..=len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::{Error, WBTreeSet};
    ///
    /// let set = WBTreeSet::from([10, 20]);
    /// assert_eq!(set.try_select(2), Ok(&20));
    /// assert_eq!(set.try_select(3), Err(Error::RankOutOfRange { rank: 3, len: 2 }));
    /// ```
    pub fn try_select(&self, rank: usize) -> Result<&T, Error> {
        self.select(rank).ok_or(Error::RankOutOfRange { rank, len: self.len() })
    }

    /// Returns the 1-based position of `value` in ascending order, or `None` if it is not
    /// present. This is the inverse of [`select`](WBTreeSet::select).
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([10, 20, 30]);
    /// assert_eq!(set.rank_of(&20), Some(2));
    /// assert_eq!(set.rank_of(&25), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn rank_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.rank_of(value)
    }

    /// Counts the elements greater than or equal to `value`.
    ///
    /// `value` does not need to be in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([1, 2, 3, 5, 8, 9]);
    /// assert_eq!(set.count_geq(&5), 3);
    /// assert_eq!(set.count_geq(&4), 3);
    /// assert_eq!(set.count_geq(&0), 6);
    /// assert_eq!(set.count_geq(&10), 0);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn count_geq<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.count_geq(value)
    }

    /// Counts the elements less than or equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([1, 2, 3, 5, 8, 9]);
    /// assert_eq!(set.count_leq(&3), 3);
    /// assert_eq!(set.count_leq(&4), 3);
    /// assert_eq!(set.count_leq(&100), 6);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn count_leq<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.count_leq(value)
    }

    /// Counts the elements `x` with `low <= x <= high`.
    ///
    /// Neither bound needs to be in the set. An inverted range (`high < low`) counts 0; use
    /// [`try_count_range`](WBTreeSet::try_count_range) to treat it as an error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([1, 2, 3, 5, 8, 9]);
    /// assert_eq!(set.count_range(&2, &8), 4);
    /// assert_eq!(set.count_range(&4, &4), 0);
    /// assert_eq!(set.count_range(&5, &5), 1);
    /// assert_eq!(set.count_range(&8, &2), 0);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn count_range<Q>(&self, low: &Q, high: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.count_range(low, high)
    }

    /// Counts the elements `x` with `low <= x <= high`.
    ///
    /// # Errors
    ///
    /// [`Error::InvertedRange`] when `high < low`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::{Error, WBTreeSet};
    ///
    /// let set = WBTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.try_count_range(&1, &2), Ok(2));
    /// assert_eq!(set.try_count_range(&2, &1), Err(Error::InvertedRange));
    /// ```
    pub fn try_count_range<Q>(&self, low: &Q, high: &Q) -> Result<usize, Error>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if high < low {
            return Err(Error::InvertedRange);
        }
        Ok(self.count_range(low, high))
    }
}
