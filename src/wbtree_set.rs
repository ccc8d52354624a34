use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use crate::Error;
use crate::raw::{RawIter, RawWBTree};

mod bulk;
mod capacity;
mod order_statistic;
mod shape;

pub use shape::Outline;

/// An ordered set based on a weight-balanced binary search tree.
///
/// Every node counts the elements in its left and right subtrees. Those counters are kept
/// exact through insertions and removals, which lets the order-statistic queries
/// ([`select`], [`count_geq`], [`count_leq`], [`count_range`]) run in time proportional to
/// the height of the tree instead of its length.
///
/// The tree stays balanced by weight rather than by height: no node may hold more than
/// twice as many elements on one side as on the other, plus one. A node that falls outside
/// that ratio after an update has its whole subtree rebuilt as a minimum-height tree.
///
/// It is a logic error for an item to be modified in such a way that the item's ordering
/// relative to any other item, as determined by the [`Ord`] trait, changes while it is in
/// the set. The behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the `WBTreeSet` that observed the logic error and not result in
/// undefined behavior.
///
/// [`select`]: WBTreeSet::select
/// [`count_geq`]: WBTreeSet::count_geq
/// [`count_leq`]: WBTreeSet::count_leq
/// [`count_range`]: WBTreeSet::count_range
///
/// # Examples
///
/// ```
/// use wb_rank_tree::WBTreeSet;
///
/// let mut scores = WBTreeSet::new();
/// scores.insert(72);
/// scores.insert(95);
/// scores.insert(88);
/// scores.insert(61);
///
/// // How many scores are at least 80?
/// assert_eq!(scores.count_geq(&80), 2);
///
/// // The median (second of four, counting from 1).
/// assert_eq!(scores.select(2), Some(&72));
///
/// scores.remove(&72);
/// assert_eq!(scores.iter().copied().collect::<Vec<_>>(), [61, 88, 95]);
/// ```
///
/// A `WBTreeSet` with a known list of items can be initialized from an array:
///
/// ```
/// use wb_rank_tree::WBTreeSet;
///
/// let set = WBTreeSet::from([1, 2, 3]);
/// ```
pub struct WBTreeSet<T> {
    tree: RawWBTree<T>,
}

/// An iterator over the items of a `WBTreeSet`, in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`WBTreeSet`].
///
/// # Examples
///
/// ```
/// use wb_rank_tree::WBTreeSet;
///
/// let set = WBTreeSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: WBTreeSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: RawIter<'a, T>,
}

/// An owning iterator over the items of a `WBTreeSet` in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`WBTreeSet`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: WBTreeSet#method.into_iter
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T> WBTreeSet<T> {
    /// Makes a new, empty `WBTreeSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let mut set = WBTreeSet::new();
    /// set.insert(1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> WBTreeSet<T> {
        WBTreeSet { tree: RawWBTree::new() }
    }

    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let mut v = WBTreeSet::from([1, 2]);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns `true` if the set contains a value.
    ///
    /// The value may be any borrowed form of the set's element type, but the ordering on
    /// the borrowed form *must* match the ordering on the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.contains(value)
    }

    /// Returns a reference to the value in the set, if any, that is equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.get(&2), Some(&2));
    /// assert_eq!(set.get(&4), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.get(value)
    }

    /// Returns the first element in the set, if any.
    /// This is the minimum element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let mut set = WBTreeSet::new();
    /// assert_eq!(set.first(), None);
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[doc(alias = "min")]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Returns the last element in the set, if any.
    /// This is the maximum element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let mut set = WBTreeSet::new();
    /// assert_eq!(set.last(), None);
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.last(), Some(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[doc(alias = "max")]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Returns the first element, or [`Error::NotFound`] if the set is empty.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::{Error, WBTreeSet};
    ///
    /// let mut set = WBTreeSet::new();
    /// assert_eq!(set.try_first(), Err(Error::NotFound));
    /// set.insert(4);
    /// assert_eq!(set.try_first(), Ok(&4));
    /// ```
    pub fn try_first(&self) -> Result<&T, Error> {
        self.first().ok_or(Error::NotFound)
    }

    /// Returns the last element, or [`Error::NotFound`] if the set is empty.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the set is empty.
    pub fn try_last(&self) -> Result<&T, Error> {
        self.last().ok_or(Error::NotFound)
    }

    /// Removes and returns the first element in the set.
    /// The first element is the minimum element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let mut set = WBTreeSet::from([1, 2]);
    /// while let Some(n) = set.pop_first() {
    ///     assert!(set.iter().all(|&k| k > n));
    /// }
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) amortized
    pub fn pop_first(&mut self) -> Option<T> {
        self.tree.pop_first()
    }

    /// Removes and returns the last element in the set.
    /// The last element is the maximum element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let mut set = WBTreeSet::from([1, 2]);
    /// while let Some(n) = set.pop_last() {
    ///     assert!(set.iter().all(|&k| k < n));
    /// }
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) amortized
    pub fn pop_last(&mut self) -> Option<T> {
        self.tree.pop_last()
    }

    /// If the set contains an element equal to the value, removes it from the set and drops
    /// it. Returns whether such an element was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let mut set = WBTreeSet::new();
    ///
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) amortized
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.remove(value).is_some()
    }

    /// Removes and returns the element in the set, if any, that is equal to the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let mut set = WBTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) amortized
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.remove(value)
    }

    /// Removes and returns the element equal to the value.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no equal element is present; the set is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::{Error, WBTreeSet};
    ///
    /// let mut set = WBTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.try_remove(&3), Ok(3));
    /// assert_eq!(set.try_remove(&3), Err(Error::NotFound));
    /// ```
    pub fn try_remove<Q>(&mut self, value: &Q) -> Result<T, Error>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.take(value).ok_or(Error::NotFound)
    }

    /// Gets an iterator that visits the elements in the `WBTreeSet` in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), Some(&3));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) to create the iterator; each step is O(1) amortized.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: RawIter::new(&self.tree),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let mut a = WBTreeSet::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1);
    /// assert_eq!(a.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[doc(alias = "size")]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

impl<T: Ord> WBTreeSet<T> {
    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the set did not previously contain an equal value, `true` is returned.
    /// - If the set already contained an equal value, `false` is returned, the set is left
    ///   unchanged and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let mut set = WBTreeSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) amortized
    pub fn insert(&mut self, value: T) -> bool {
        self.tree.insert(value).is_ok()
    }

    /// Adds a value to the set, failing if an equal value is already present.
    ///
    /// # Errors
    ///
    /// [`Error::Duplicate`] when the set already holds an equal value; the set is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::{Error, WBTreeSet};
    ///
    /// let mut set = WBTreeSet::new();
    /// assert_eq!(set.try_insert(7), Ok(()));
    /// assert_eq!(set.try_insert(7), Err(Error::Duplicate));
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<(), Error> {
        self.tree.insert(value).map_err(|_| Error::Duplicate)
    }
}

impl<T: Hash> Hash for WBTreeSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: PartialEq> PartialEq for WBTreeSet<T> {
    fn eq(&self, other: &WBTreeSet<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for WBTreeSet<T> {}

impl<T: PartialOrd> PartialOrd for WBTreeSet<T> {
    fn partial_cmp(&self, other: &WBTreeSet<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for WBTreeSet<T> {
    fn cmp(&self, other: &WBTreeSet<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Clone> Clone for WBTreeSet<T> {
    fn clone(&self) -> Self {
        WBTreeSet {
            tree: self.tree.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for WBTreeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for WBTreeSet<T> {
    fn default() -> Self {
        WBTreeSet::new()
    }
}

impl<T: Ord> FromIterator<T> for WBTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = WBTreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for WBTreeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for WBTreeSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for WBTreeSet<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> IntoIterator for WBTreeSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `WBTreeSet`'s contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wb_rank_tree::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([1, 2, 3, 4]);
    ///
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.tree.into_sorted_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a WBTreeSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}

impl<T> Default for IntoIter<T> {
    /// Creates an empty `wbtree_set::IntoIter`.
    ///
    /// ```
    /// # use wb_rank_tree::wbtree_set;
    /// let iter: wbtree_set::IntoIter<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: alloc::vec::Vec::new().into_iter(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn set_is_send_and_sync_for_plain_values() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<WBTreeSet<i32>>();
        assert_send_sync::<Iter<'_, i32>>();
        assert_send_sync::<IntoIter<i32>>();
    }

    #[test]
    fn iter_debug_lists_remaining_items() {
        let set = WBTreeSet::from([1, 2, 3]);
        let mut iter = set.iter();
        iter.next();
        assert_eq!(alloc::format!("{iter:?}"), "[2, 3]");
        assert_eq!(alloc::format!("{set:?}"), "{1, 2, 3}");
        assert_eq!(iter.count(), 2);
    }

    #[test]
    fn equality_ignores_shape() {
        // Built by rebuilds versus built directly: same contents, possibly different shape.
        let inserted: WBTreeSet<i32> = (0..100).collect();
        let bulk: WBTreeSet<i32> = WBTreeSet::from_sorted((0..100).collect()).expect("sorted input");
        assert_eq!(inserted, bulk);
        assert_eq!(inserted.cmp(&bulk), Ordering::Equal);

        let shorter: WBTreeSet<i32> = (0..99).collect();
        assert!(shorter < inserted);
        assert_ne!(shorter, inserted);
    }

    #[test]
    fn into_iter_is_double_ended() {
        let set: WBTreeSet<i32> = [4, 1, 3, 2].into_iter().collect();
        let mut iter = set.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.collect::<Vec<_>>(), [2, 3]);
    }
}
