use core::borrow::Borrow;
use core::cmp::Ordering::{Equal, Greater, Less};

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;

/// The core weight-balanced tree backing `WBTreeSet`.
///
/// Every node records the sizes of both of its subtrees. After an insertion or removal
/// changes one of those counters, the node checks whether either side now holds more than
/// twice the other plus one; if so, its whole subtree is flattened and rebuilt as a
/// minimum-height tree before the recursion returns to the parent.
pub(crate) struct RawWBTree<T> {
    /// Arena storing all tree nodes.
    pub(super) nodes: Arena<Node<T>>,
    /// Handle to the root node, if the tree is non-empty.
    pub(super) root: Option<Handle>,
}

impl<T> RawWBTree<T> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` elements.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    /// Returns the number of elements, read from the root's counters.
    pub(crate) fn len(&self) -> usize {
        self.root.map_or(0, |root| self.nodes.get(root).subtree_size())
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every element.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the node behind `handle`.
    #[cfg(test)]
    pub(crate) fn node(&self, handle: Handle) -> &Node<T> {
        self.nodes.get(handle)
    }

    /// Returns the smallest element.
    pub(crate) fn first(&self) -> Option<&T> {
        let mut node = self.nodes.get(self.root?);
        while let Some(left) = node.left() {
            node = self.nodes.get(left);
        }
        Some(node.value())
    }

    /// Returns the largest element.
    pub(crate) fn last(&self) -> Option<&T> {
        let mut node = self.nodes.get(self.root?);
        while let Some(right) = node.right() {
            node = self.nodes.get(right);
        }
        Some(node.value())
    }

    /// Searches for a value equal to `key` and returns the handle of its node.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(node.value().borrow()) {
                Less => node.left(),
                Equal => return Some(handle),
                Greater => node.right(),
            };
        }
        None
    }

    /// Returns the stored value equal to `key`.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|handle| self.nodes.get(handle).value())
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    /// Removes and returns the smallest element.
    pub(crate) fn pop_first(&mut self) -> Option<T> {
        let (root, first) = self.remove_min(self.root?);
        self.root = root;
        Some(first)
    }

    /// Removes and returns the largest element.
    pub(crate) fn pop_last(&mut self) -> Option<T> {
        let (root, last) = self.remove_max(self.root?);
        self.root = root;
        Some(last)
    }

    /// Detaches the minimum of the subtree at `handle`.
    ///
    /// Returns the new subtree root and the detached value. Every node on the left spine
    /// loses one node on its left side, so each re-checks whether its right side now
    /// outweighs the left.
    fn remove_min(&mut self, handle: Handle) -> (Option<Handle>, T) {
        let node = self.nodes.get(handle);
        let Some(left) = node.left() else {
            let right = node.right();
            return (right, self.nodes.take(handle).into_value());
        };

        let (child, min) = self.remove_min(left);
        let node = self.nodes.get_mut(handle);
        node.shrink_left(child);
        let root = if node.right_overweight() { self.rebuild(handle) } else { handle };
        (Some(root), min)
    }

    /// Detaches the maximum of the subtree at `handle`. Mirror image of `remove_min`.
    fn remove_max(&mut self, handle: Handle) -> (Option<Handle>, T) {
        let node = self.nodes.get(handle);
        let Some(right) = node.right() else {
            let left = node.left();
            return (left, self.nodes.take(handle).into_value());
        };

        let (child, max) = self.remove_max(right);
        let node = self.nodes.get_mut(handle);
        node.shrink_right(child);
        let root = if node.left_overweight() { self.rebuild(handle) } else { handle };
        (Some(root), max)
    }

    /// Removes the node at `handle` itself and returns the replacement subtree root.
    fn unlink(&mut self, handle: Handle) -> (Option<Handle>, T) {
        let node = self.nodes.get(handle);
        match (node.left(), node.right()) {
            (None, child) | (child, None) => (child, self.nodes.take(handle).into_value()),
            (Some(_), Some(right)) => {
                // Successor promotion: the right subtree is non-empty, so its minimum exists.
                debug_assert!(
                    node.size_right().to_usize() > 0,
                    "`RawWBTree::unlink()` - right child present but `size_right` is zero!"
                );
                let (child, successor) = self.remove_min(right);
                let node = self.nodes.get_mut(handle);
                node.shrink_right(child);
                let removed = node.replace_value(successor);
                let root = if node.left_overweight() { self.rebuild(handle) } else { handle };
                (Some(root), removed)
            }
        }
    }

    /// Removes the value equal to `key` from the subtree at `subtree`.
    ///
    /// Returns `None` without touching the tree when no such value exists, otherwise the
    /// new subtree root and the removed value.
    fn remove_from<Q>(&mut self, subtree: Option<Handle>, key: &Q) -> Option<(Option<Handle>, T)>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = subtree?;
        let node = self.nodes.get(handle);
        let (left, right) = (node.left(), node.right());

        match key.cmp(node.value().borrow()) {
            Equal => Some(self.unlink(handle)),
            Less => {
                let (child, removed) = self.remove_from(left, key)?;
                let node = self.nodes.get_mut(handle);
                node.shrink_left(child);
                let root = if node.right_overweight() { self.rebuild(handle) } else { handle };
                Some((Some(root), removed))
            }
            Greater => {
                let (child, removed) = self.remove_from(right, key)?;
                let node = self.nodes.get_mut(handle);
                node.shrink_right(child);
                let root = if node.left_overweight() { self.rebuild(handle) } else { handle };
                Some((Some(root), removed))
            }
        }
    }

    /// Removes the value equal to `key` and returns it.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (root, removed) = self.remove_from(self.root, key)?;
        self.root = root;
        Some(removed)
    }
}

impl<T: Ord> RawWBTree<T> {
    /// Inserts `value` below `subtree` and returns the new subtree root.
    ///
    /// An equal value already in the subtree is left in place and `value` is handed back
    /// in `Err` with no counter touched on the way up.
    fn insert_into(&mut self, subtree: Option<Handle>, value: T) -> Result<Handle, T> {
        let Some(handle) = subtree else {
            return Ok(self.nodes.alloc(Node::new(value)));
        };
        let node = self.nodes.get(handle);
        let (left, right) = (node.left(), node.right());

        match value.cmp(node.value()) {
            Equal => Err(value),
            Less => {
                let child = self.insert_into(left, value)?;
                let node = self.nodes.get_mut(handle);
                node.grow_left(child);
                Ok(if node.left_overweight() { self.rebuild(handle) } else { handle })
            }
            Greater => {
                let child = self.insert_into(right, value)?;
                let node = self.nodes.get_mut(handle);
                node.grow_right(child);
                Ok(if node.right_overweight() { self.rebuild(handle) } else { handle })
            }
        }
    }

    /// Inserts `value`, or returns it in `Err` if an equal value is already present.
    pub(crate) fn insert(&mut self, value: T) -> Result<(), T> {
        let root = self.insert_into(self.root, value)?;
        self.root = Some(root);
        Ok(())
    }
}

impl<T: Clone> Clone for RawWBTree<T> {
    /// Clones node for node, so the copy has exactly the same shape.
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::manual_assert, clippy::uninlined_format_args, clippy::cast_possible_wrap)]
pub(crate) mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    impl<T: Ord + core::fmt::Debug> RawWBTree<T> {
        /// Validates the order, size-accuracy and weight-balance invariants. Panics with
        /// every violation found.
        pub(crate) fn validate_invariants(&self) {
            let mut errors: Vec<String> = Vec::new();
            let mut previous: Option<&T> = None;
            let counted = self.validate_node(self.root, &mut previous, &mut errors);

            if self.nodes.len() != counted {
                errors.push(alloc::format!(
                    "Arena holds {} nodes but {} are reachable from the root",
                    self.nodes.len(),
                    counted
                ));
            }
            if self.len() != counted {
                errors.push(alloc::format!("len mismatch: len()={}, actual count={}", self.len(), counted));
            }

            assert!(errors.is_empty(), "Tree invariant violations:\n{}", errors.join("\n"));
        }

        // Walks the subtree in order and returns its true node count.
        fn validate_node<'a>(
            &'a self,
            subtree: Option<Handle>,
            previous: &mut Option<&'a T>,
            errors: &mut Vec<String>,
        ) -> usize {
            let Some(handle) = subtree else {
                return 0;
            };
            let node = self.nodes.get(handle);

            let left = self.validate_node(node.left(), previous, errors);

            if let Some(prev) = *previous
                && prev >= node.value()
            {
                errors.push(alloc::format!(
                    "Order violation at handle {:?}: {:?} is not below {:?}",
                    handle,
                    prev,
                    node.value()
                ));
            }
            *previous = Some(node.value());

            let right = self.validate_node(node.right(), previous, errors);

            if node.size_left().to_usize() != left || node.size_right().to_usize() != right {
                errors.push(alloc::format!(
                    "Size mismatch at handle {:?}: stored=({}, {}), actual=({}, {})",
                    handle,
                    node.size_left().to_usize(),
                    node.size_right().to_usize(),
                    left,
                    right
                ));
            }
            if !node.is_weight_balanced() {
                errors.push(alloc::format!(
                    "Weight balance violated at handle {:?} ({:?}): left={}, right={}",
                    handle,
                    node.value(),
                    left,
                    right
                ));
            }

            left + right + 1
        }
    }

    pub(crate) fn tree_from(values: impl IntoIterator<Item = i32>) -> RawWBTree<i32> {
        let mut tree = RawWBTree::new();
        for value in values {
            let _ = tree.insert(value);
        }
        tree
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i32),
        Remove(i32),
        PopFirst,
        PopLast,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => (0i32..1000).prop_map(Op::Insert),
            3 => (0i32..1000).prop_map(Op::Remove),
            1 => Just(Op::PopFirst),
            1 => Just(Op::PopLast),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn invariants_hold_after_every_operation(ops in prop::collection::vec(op_strategy(), 0..500)) {
            let mut tree: RawWBTree<i32> = RawWBTree::new();
            let mut model = alloc::collections::BTreeSet::new();

            for op in ops {
                match op {
                    Op::Insert(value) => {
                        prop_assert_eq!(tree.insert(value).is_ok(), model.insert(value));
                    }
                    Op::Remove(value) => {
                        prop_assert_eq!(tree.remove(&value), model.take(&value));
                    }
                    Op::PopFirst => {
                        prop_assert_eq!(tree.pop_first(), model.pop_first());
                    }
                    Op::PopLast => {
                        prop_assert_eq!(tree.pop_last(), model.pop_last());
                    }
                }
                tree.validate_invariants();
                prop_assert_eq!(tree.len(), model.len());
            }
        }

        #[test]
        fn monotone_inserts_stay_balanced(count in 1i32..600, descending in any::<bool>()) {
            let tree = if descending { tree_from((0..count).rev()) } else { tree_from(0..count) };
            tree.validate_invariants();
            prop_assert_eq!(tree.first(), Some(&0));
            prop_assert_eq!(tree.last(), Some(&(count - 1)));
        }
    }

    #[test]
    fn duplicate_insert_hands_value_back() {
        let mut tree = tree_from([5, 2, 8]);
        assert_eq!(tree.insert(2), Err(2));
        assert_eq!(tree.len(), 3);
        tree.validate_invariants();
    }

    #[test]
    fn remove_absent_leaves_tree_untouched() {
        let mut tree = tree_from([5, 2, 8, 1, 9, 3]);
        let before: Vec<(i32, usize, usize)> = (1..=9)
            .filter_map(|v| tree.search(&v))
            .map(|h| {
                let node = tree.node(h);
                (*node.value(), node.size_left().to_usize(), node.size_right().to_usize())
            })
            .collect();

        assert_eq!(tree.remove(&4), None);

        let after: Vec<(i32, usize, usize)> = (1..=9)
            .filter_map(|v| tree.search(&v))
            .map(|h| {
                let node = tree.node(h);
                (*node.value(), node.size_left().to_usize(), node.size_right().to_usize())
            })
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn remove_with_two_children_promotes_successor() {
        // 5 is the root with children on both sides.
        let mut tree = tree_from([5, 2, 8, 1, 9, 3]);
        let root = tree.root.expect("non-empty tree");
        assert_eq!(*tree.node(root).value(), 5);

        assert_eq!(tree.remove(&5), Some(5));
        tree.validate_invariants();

        let root = tree.root.expect("non-empty tree");
        assert_eq!(*tree.node(root).value(), 8);
        assert!(!tree.contains(&5));
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn successor_removal_rechecks_the_promoted_node() {
        // A removal of the root that drains the right side must still leave every node
        // within the weight-balance ratio.
        let mut tree = tree_from([4, 2, 6, 1, 3, 5, 7]);
        for value in [4, 5, 6] {
            assert_eq!(tree.remove(&value), Some(value));
            tree.validate_invariants();
        }
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn first_and_last_on_empty_tree() {
        let tree: RawWBTree<i32> = RawWBTree::new();
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        tree.validate_invariants();
    }

    #[test]
    fn clone_preserves_shape() {
        let tree = tree_from((0..50).map(|v| (v * 37) % 101));
        let copy = tree.clone();
        copy.validate_invariants();
        assert_eq!(copy.root, tree.root);
        for value in 0..101 {
            assert_eq!(copy.search(&value), tree.search(&value));
        }
    }

    #[test]
    fn arena_slots_are_recycled() {
        let mut tree = tree_from(0..200);
        for value in 0..150 {
            tree.remove(&value);
        }
        for value in 1000..1150 {
            let _ = tree.insert(value);
        }
        tree.validate_invariants();
        assert_eq!(tree.nodes.len(), 200);
        assert!(tree.capacity() < 400);
    }
}
