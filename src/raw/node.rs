use super::handle::Handle;
use super::size::Size;

/// A binary tree node augmented with the node counts of both child subtrees.
///
/// The counters let rank queries skip whole subtrees, and they are what the weight-balance
/// check compares after every insertion or removal below this node.
#[derive(Clone)]
pub(crate) struct Node<T> {
    value: T,
    left: Option<Handle>,
    right: Option<Handle>,
    // Number of nodes in the left subtree, not counting this one.
    size_left: Size,
    // Number of nodes in the right subtree, not counting this one.
    size_right: Size,
}

impl<T> Node<T> {
    /// Creates a childless node.
    pub(crate) const fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            size_left: Size::ZERO,
            size_right: Size::ZERO,
        }
    }

    #[inline]
    pub(crate) const fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    /// Swaps in a new value and returns the old one. Only valid when the new value keeps
    /// the node in the same position of the in-order sequence.
    pub(crate) fn replace_value(&mut self, value: T) -> T {
        core::mem::replace(&mut self.value, value)
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn size_left(&self) -> Size {
        self.size_left
    }

    #[inline]
    pub(crate) const fn size_right(&self) -> Size {
        self.size_right
    }

    /// Number of nodes in the subtree rooted here, this one included.
    #[inline]
    pub(crate) const fn subtree_size(&self) -> usize {
        self.size_left.to_usize() + self.size_right.to_usize() + 1
    }

    pub(crate) const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Attaches a left subtree together with its node count.
    pub(crate) fn attach_left(&mut self, child: Option<Handle>, size: Size) {
        self.left = child;
        self.size_left = size;
    }

    /// Attaches a right subtree together with its node count.
    pub(crate) fn attach_right(&mut self, child: Option<Handle>, size: Size) {
        self.right = child;
        self.size_right = size;
    }

    /// Re-links the left child after it gained one node.
    pub(crate) fn grow_left(&mut self, child: Handle) {
        self.left = Some(child);
        self.size_left = self.size_left.increment();
    }

    /// Re-links the right child after it gained one node.
    pub(crate) fn grow_right(&mut self, child: Handle) {
        self.right = Some(child);
        self.size_right = self.size_right.increment();
    }

    /// Re-links the left child after it lost one node.
    pub(crate) fn shrink_left(&mut self, child: Option<Handle>) {
        self.left = child;
        self.size_left = self.size_left.decrement();
    }

    /// Re-links the right child after it lost one node.
    pub(crate) fn shrink_right(&mut self, child: Option<Handle>) {
        self.right = child;
        self.size_right = self.size_right.decrement();
    }

    #[inline]
    pub(crate) const fn left_overweight(&self) -> bool {
        self.size_left.outweighs(self.size_right)
    }

    #[inline]
    pub(crate) const fn right_overweight(&self) -> bool {
        self.size_right.outweighs(self.size_left)
    }

    #[cfg(test)]
    pub(crate) const fn is_weight_balanced(&self) -> bool {
        !self.left_overweight() && !self.right_overweight()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_balanced_leaf() {
        let node = Node::new('x');
        assert!(node.is_leaf());
        assert!(node.is_weight_balanced());
        assert_eq!(node.subtree_size(), 1);
        assert_eq!(*node.value(), 'x');
    }

    #[test]
    fn grow_and_shrink_track_counts() {
        let child = Handle::from_index(3);
        let mut node = Node::new(10);

        node.grow_left(child);
        assert_eq!(node.left(), Some(child));
        assert_eq!(node.size_left(), Size::ONE);
        assert!(!node.left_overweight());

        node.grow_left(child);
        assert!(node.left_overweight());
        assert!(!node.is_weight_balanced());

        node.grow_right(child);
        assert!(node.is_weight_balanced());
        assert_eq!(node.subtree_size(), 4);

        node.shrink_right(None);
        node.shrink_left(Some(child));
        assert_eq!(node.right(), None);
        assert_eq!(node.size_left(), Size::ONE);
        assert_eq!(node.subtree_size(), 2);
    }

    #[test]
    fn replace_value_returns_previous() {
        let mut node = Node::new(1);
        assert_eq!(node.replace_value(2), 1);
        assert_eq!(node.into_value(), 2);
    }
}
