use core::borrow::Borrow;
use core::cmp::Ordering::{Equal, Greater, Less};

use super::raw_wbtree::RawWBTree;

// Each query walks a single root-to-leaf path and reads the size counters along it, so
// every one of them is O(height).
impl<T> RawWBTree<T> {
    /// Returns the `rank`-th smallest element, counting from 1.
    pub(crate) fn select(&self, rank: usize) -> Option<&T> {
        if rank == 0 || rank > self.len() {
            return None;
        }

        let mut current = self.root;
        let mut remaining = rank;
        loop {
            let node = self.nodes.get(current?);
            let here = node.size_left().to_usize() + 1;
            match remaining.cmp(&here) {
                Equal => return Some(node.value()),
                Less => current = node.left(),
                Greater => {
                    remaining -= here;
                    current = node.right();
                }
            }
        }
    }

    /// Returns the 1-based position of the element equal to `key`.
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        let mut before = 0;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match key.cmp(node.value().borrow()) {
                Less => current = node.left(),
                Equal => return Some(before + node.size_left().to_usize() + 1),
                Greater => {
                    before += node.size_left().to_usize() + 1;
                    current = node.right();
                }
            }
        }
        None
    }

    /// Counts the elements greater than or equal to `key`.
    pub(crate) fn count_geq<Q>(&self, key: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut count = 0;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if key.cmp(node.value().borrow()) == Greater {
                current = node.right();
            } else {
                // This node and its whole right subtree qualify; the left may hold more.
                count += node.size_right().to_usize() + 1;
                current = node.left();
            }
        }
        count
    }

    /// Counts the elements less than or equal to `key`.
    pub(crate) fn count_leq<Q>(&self, key: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut count = 0;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if key.cmp(node.value().borrow()) == Less {
                current = node.left();
            } else {
                count += node.size_left().to_usize() + 1;
                current = node.right();
            }
        }
        count
    }

    /// Counts the elements in `low..=high`, or 0 when `high < low`.
    pub(crate) fn count_range<Q>(&self, low: &Q, high: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if high < low {
            return 0;
        }
        // The difference drops `low` itself when it is present.
        self.count_leq(high) - self.count_leq(low) + usize::from(self.contains(low))
    }
}
