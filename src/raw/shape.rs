use core::fmt::{self, Write};

use super::handle::Handle;
use super::raw_wbtree::RawWBTree;

const INDENT: usize = 3;

impl<T> RawWBTree<T> {
    /// Edge count of the longest root-to-leaf path; `None` when the tree is empty.
    pub(crate) fn height(&self) -> Option<usize> {
        self.subtree_height(self.root)
    }

    fn subtree_height(&self, subtree: Option<Handle>) -> Option<usize> {
        let node = self.nodes.get(subtree?);
        let tallest = self.subtree_height(node.left()).max(self.subtree_height(node.right()));
        Some(tallest.map_or(0, |height| height + 1))
    }

    /// Number of nodes without children.
    pub(crate) fn leaf_count(&self) -> usize {
        self.subtree_leaves(self.root)
    }

    fn subtree_leaves(&self, subtree: Option<Handle>) -> usize {
        let Some(handle) = subtree else {
            return 0;
        };
        let node = self.nodes.get(handle);
        if node.is_leaf() {
            1
        } else {
            self.subtree_leaves(node.left()) + self.subtree_leaves(node.right())
        }
    }

    /// Number of nodes `level` edges below the root.
    pub(crate) fn count_at_level(&self, level: usize) -> usize {
        self.subtree_count_at(self.root, level)
    }

    fn subtree_count_at(&self, subtree: Option<Handle>, level: usize) -> usize {
        let Some(handle) = subtree else {
            return 0;
        };
        let node = self.nodes.get(handle);
        match level.checked_sub(1) {
            None => 1,
            Some(below) => self.subtree_count_at(node.left(), below) + self.subtree_count_at(node.right(), below),
        }
    }

    /// Writes a pre-order outline: one `[ value ]` line per node, indented by depth, with
    /// ` nil` marking the missing child of a node that has only one.
    pub(crate) fn fmt_outline(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        T: fmt::Display,
    {
        match self.root {
            Some(root) => self.fmt_subtree(f, root, 0),
            None => f.write_str(" nil\n"),
        }
    }

    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, handle: Handle, depth: usize) -> fmt::Result
    where
        T: fmt::Display,
    {
        let node = self.nodes.get(handle);
        write_indent(f, depth)?;
        writeln!(f, "[ {} ]", node.value())?;
        if node.is_leaf() {
            return Ok(());
        }

        for child in [node.left(), node.right()] {
            match child {
                Some(child) => self.fmt_subtree(f, child, depth + 1)?,
                None => {
                    write_indent(f, depth + 1)?;
                    f.write_str(" nil\n")?;
                }
            }
        }
        Ok(())
    }
}

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth * INDENT {
        f.write_char('-')?;
    }
    Ok(())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::super::raw_wbtree::tests::tree_from;
    use super::*;
    use alloc::string::String;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    struct Outline<'a>(&'a RawWBTree<i32>);

    impl fmt::Display for Outline<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fmt_outline(f)
        }
    }

    fn outline(tree: &RawWBTree<i32>) -> String {
        alloc::format!("{}", Outline(tree))
    }

    #[test]
    fn height_of_small_trees() {
        assert_eq!(tree_from([]).height(), None);
        assert_eq!(tree_from([1]).height(), Some(0));
        assert_eq!(tree_from([2, 1]).height(), Some(1));
        assert_eq!(tree_from([2, 1, 3, 4]).height(), Some(2));
    }

    #[test]
    fn leaves_and_levels() {
        let tree = RawWBTree::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]).expect("sorted input");
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.count_at_level(0), 1);
        assert_eq!(tree.count_at_level(1), 2);
        assert_eq!(tree.count_at_level(2), 4);
        assert_eq!(tree.count_at_level(3), 0);

        let empty = tree_from([]);
        assert_eq!(empty.leaf_count(), 0);
        assert_eq!(empty.count_at_level(0), 0);
    }

    #[test]
    fn levels_sum_to_len() {
        let tree = tree_from((0..500).map(|v| (v * 211) % 499));
        let height = tree.height().expect("non-empty tree");
        let total: usize = (0..=height).map(|level| tree.count_at_level(level)).sum();
        assert_eq!(total, tree.len());
    }

    #[test]
    fn outline_marks_missing_children() {
        let tree = RawWBTree::from_sorted(vec![1, 2, 3, 4]).expect("sorted input");
        let expected = "\
[ 2 ]
---[ 1 ]
---[ 3 ]
------ nil
------[ 4 ]
";
        assert_eq!(outline(&tree), expected);
        assert_eq!(outline(&tree_from([])), " nil\n");
    }
}
