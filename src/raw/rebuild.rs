use alloc::vec::Vec;

use super::handle::Handle;
use super::node::Node;
use super::raw_wbtree::RawWBTree;
use super::size::Size;
use crate::Error;

impl<T> RawWBTree<T> {
    /// Replaces the subtree at `handle` with a minimum-height subtree holding the same
    /// values, and returns its root.
    ///
    /// The old nodes are released to the arena's free list before the new ones are
    /// allocated, so the rebuild recycles exactly the slots it frees.
    pub(super) fn rebuild(&mut self, handle: Handle) -> Handle {
        let node = self.nodes.get(handle);
        let len = node.subtree_size();
        log::trace!(
            "rebuilding subtree of {len} nodes (left {}, right {})",
            node.size_left().to_usize(),
            node.size_right().to_usize()
        );

        let mut values = Vec::with_capacity(len);
        self.drain_subtree(Some(handle), &mut values);
        self.build_nonempty(len, &mut values.into_iter())
    }

    /// Moves the values of `subtree` into `out` in ascending order, releasing every node.
    pub(super) fn drain_subtree(&mut self, subtree: Option<Handle>, out: &mut Vec<T>) {
        let Some(handle) = subtree else {
            return;
        };
        let node = self.nodes.take(handle);
        let (left, right) = (node.left(), node.right());

        self.drain_subtree(left, out);
        out.push(node.into_value());
        self.drain_subtree(right, out);
    }

    /// Builds a perfectly balanced subtree from the next `len` values of `values`, which
    /// must arrive in ascending order.
    fn build_subtree<I>(&mut self, len: usize, values: &mut I) -> Option<Handle>
    where
        I: Iterator<Item = T>,
    {
        (len > 0).then(|| self.build_nonempty(len, values))
    }

    // The root is the lower middle element, so a range of even length puts its extra
    // element in the right subtree.
    fn build_nonempty<I>(&mut self, len: usize, values: &mut I) -> Handle
    where
        I: Iterator<Item = T>,
    {
        let left_len = (len - 1) / 2;
        let right_len = len - 1 - left_len;

        let left = self.build_subtree(left_len, values);
        let value = values.next().expect("`RawWBTree::build_nonempty()` - value sequence ended early!");
        let right = self.build_subtree(right_len, values);

        let mut node = Node::new(value);
        node.attach_left(left, Size::from_usize(left_len));
        node.attach_right(right, Size::from_usize(right_len));
        self.nodes.alloc(node)
    }

    /// Empties the tree into an ascending `Vec`.
    pub(crate) fn into_sorted_vec(mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len());
        let root = self.root.take();
        self.drain_subtree(root, &mut values);
        values
    }
}

impl<T: Ord> RawWBTree<T> {
    /// Builds a balanced tree directly from strictly ascending values in O(n).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsorted`] with the index of the first value that is not greater
    /// than its predecessor.
    pub(crate) fn from_sorted(values: Vec<T>) -> Result<Self, Error> {
        if let Some(index) = values.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(Error::Unsorted { position: index + 1 });
        }

        let len = values.len();
        log::debug!("building tree from {len} sorted values");
        let mut tree = Self::with_capacity(len);
        tree.root = tree.build_subtree(len, &mut values.into_iter());
        Ok(tree)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::super::raw_wbtree::tests::tree_from;
    use super::*;
    use alloc::vec;
    use proptest::prelude::*;

    fn value_at(tree: &RawWBTree<i32>, handle: Option<Handle>) -> Option<i32> {
        handle.map(|h| *tree.node(h).value())
    }

    #[test]
    fn from_sorted_roots_at_lower_middle() {
        let tree = RawWBTree::from_sorted(vec![1, 2, 3, 4]).expect("sorted input");
        tree.validate_invariants();

        let root = tree.root.expect("non-empty tree");
        let root_node = tree.node(root);
        assert_eq!(*root_node.value(), 2);
        assert_eq!(root_node.size_left().to_usize(), 1);
        assert_eq!(root_node.size_right().to_usize(), 2);
        assert_eq!(value_at(&tree, root_node.left()), Some(1));

        let right = tree.node(root_node.right().expect("right child"));
        assert_eq!(*right.value(), 3);
        assert_eq!(right.left(), None);
        assert_eq!(value_at(&tree, right.right()), Some(4));
    }

    #[test]
    fn from_sorted_empty() {
        let tree: RawWBTree<i32> = RawWBTree::from_sorted(vec![]).expect("empty input is sorted");
        assert!(tree.is_empty());
        tree.validate_invariants();
    }

    #[test]
    fn from_sorted_rejects_duplicates_and_disorder() {
        assert_eq!(
            RawWBTree::from_sorted(vec![1, 2, 2, 3]).err(),
            Some(Error::Unsorted { position: 2 })
        );
        assert_eq!(
            RawWBTree::from_sorted(vec![1, 3, 5, 4]).err(),
            Some(Error::Unsorted { position: 3 })
        );
    }

    #[test]
    fn ascending_inserts_trigger_rebuild_at_root() {
        // 1, 2, 3 leaves the root with an empty left side and two nodes on the right,
        // which exceeds 2 * 0 + 1 and rebuilds the three nodes around 2.
        let tree = tree_from([1, 2, 3]);
        tree.validate_invariants();
        let root = tree.node(tree.root.expect("non-empty tree"));
        assert_eq!(*root.value(), 2);
        assert_eq!(root.size_left().to_usize(), 1);
        assert_eq!(root.size_right().to_usize(), 1);
    }

    #[test]
    fn into_sorted_vec_drains_everything() {
        let tree = tree_from([9, 4, 7, 1, 8]);
        assert_eq!(tree.into_sorted_vec(), vec![1, 4, 7, 8, 9]);
    }

    proptest! {
        #[test]
        fn from_sorted_is_balanced(len in 0usize..2000) {
            let values: Vec<usize> = (0..len).collect();
            let tree = RawWBTree::from_sorted(values.clone()).expect("sorted input");
            tree.validate_invariants();
            prop_assert_eq!(tree.len(), len);
            prop_assert_eq!(tree.into_sorted_vec(), values);
        }

        #[test]
        fn drain_and_build_keeps_contents(values in prop::collection::btree_set(-5000i32..5000, 0..400)) {
            let tree = tree_from(values.iter().copied());
            let expected: Vec<i32> = values.into_iter().collect();
            prop_assert_eq!(tree.into_sorted_vec(), expected);
        }
    }
}
