use core::iter::FusedIterator;

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;
use super::raw_wbtree::RawWBTree;

// Weight balance keeps the height near log base 3/2 of the length, so 32 inline slots
// cover trees of a few hundred thousand elements before the stack spills to the heap.
type Stack = SmallVec<[Handle; 32]>;

/// In-order traversal with an explicit stack at each end.
///
/// The two stacks are independent; `remaining` stops both ends once they have yielded
/// every element between them, so they never cross.
pub(crate) struct RawIter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    front: Stack,
    back: Stack,
    remaining: usize,
}

impl<'a, T> RawIter<'a, T> {
    pub(crate) fn new(tree: &'a RawWBTree<T>) -> Self {
        let mut iter = Self {
            nodes: &tree.nodes,
            front: Stack::new(),
            back: Stack::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root);
        iter.push_right_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<Handle>) {
        while let Some(handle) = current {
            self.front.push(handle);
            current = self.nodes.get(handle).left();
        }
    }

    fn push_right_spine(&mut self, mut current: Option<Handle>) {
        while let Some(handle) = current {
            self.back.push(handle);
            current = self.nodes.get(handle).right();
        }
    }
}

impl<'a, T> Iterator for RawIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front.pop()?;
        let nodes = self.nodes;
        let node = nodes.get(handle);
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for RawIter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back.pop()?;
        let nodes = self.nodes;
        let node = nodes.get(handle);
        self.push_right_spine(node.left());
        self.remaining -= 1;
        Some(node.value())
    }
}

impl<T> ExactSizeIterator for RawIter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for RawIter<'_, T> {}

impl<T> Clone for RawIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}
