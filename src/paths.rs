//! Lazy, depth-first enumeration of root-to-leaf paths.
//!
//! [PathEnumerator] walks the tree in pre-order, children in stored order,
//! and pauses at every leaf. The suspended state lives in an explicit stack
//! of child-slot iterators standing in for the call stack, so the descent
//! depth is bounded by memory rather than by the platform stack. One path
//! buffer is shared across all yields; see the crate docs for the resulting
//! aliasing rule.

use crate::node::TreeNode;
use tracing::trace;

/// Default pre-allocation for the path buffer and the frame stack.
const DEFAULT_DEPTH_HINT: usize = 8;

/// Lazily produces every root-to-leaf path of a tree, one per leaf, in
/// pre-order leaf order.
///
/// This is a *lending* iterator: [PathEnumerator::next_path] returns a slice
/// borrowed from the enumerator's internal buffer, valid only until the next
/// advance. Each path yield is O(1) in allocations; the buffer grows to the
/// tree depth once and is then reused. For an owning adapter that implements
/// the standard [Iterator], see [PathEnumerator::copied].
///
/// The sequence is finite, forward-only and fused: after the last leaf,
/// every further call returns `None`.
pub struct PathEnumerator<'a, T> {
    /// One frame of pending child slots per entered node.
    stack: Vec<std::slice::Iter<'a, Option<TreeNode<T>>>>,
    /// The single path buffer shared across all yields.
    buffer: Vec<&'a T>,
    /// Taken on the first advance.
    root: Option<&'a TreeNode<T>>,
}

impl<'a, T> PathEnumerator<'a, T> {
    /// Constructor. An absent root is treated as an empty tree: the
    /// enumeration yields no paths.
    pub fn new(root: Option<&'a TreeNode<T>>) -> Self {
        Self::with_depth_hint(root, DEFAULT_DEPTH_HINT)
    }

    /// Constructor with a capacity hint. Buffer and frame stack are
    /// pre-allocated for `depth_hint` levels, which avoids re-allocation
    /// while enumerating trees of known depth.
    pub fn with_depth_hint(root: Option<&'a TreeNode<T>>, depth_hint: usize) -> Self {
        trace!(depth_hint, "creating path enumerator");
        PathEnumerator {
            stack: Vec::with_capacity(depth_hint),
            buffer: Vec::with_capacity(depth_hint),
            root,
        }
    }

    /// Advances to the next leaf and returns the root-to-leaf path, or
    /// `None` once all leaves have been produced.
    ///
    /// The returned slice borrows the shared path buffer. It cannot be held
    /// across the next call; copy it (e.g. with `to_vec`) before resuming if
    /// the path must be retained.
    pub fn next_path(&mut self) -> Option<&[&'a T]> {
        if let Some(root) = self.root.take() {
            self.enter(root);
            if root.is_leaf() {
                return Some(self.buffer.as_slice());
            }
        }
        loop {
            let frame = self.stack.last_mut()?;
            match frame.next() {
                Some(Some(child)) => {
                    self.enter(child);
                    if child.is_leaf() {
                        return Some(self.buffer.as_slice());
                    }
                }
                // vacant slot
                Some(None) => {}
                None => {
                    // all children of the top node are done, backtrack
                    self.stack.pop();
                    self.buffer.pop();
                }
            }
        }
    }

    /// Number of nodes on the path currently held in the buffer.
    pub fn depth(&self) -> usize {
        self.buffer.len()
    }

    /// Converts into a standard [Iterator] that yields an owned copy of
    /// every path, performing the copy-before-resume that retaining a path
    /// requires.
    pub fn copied(self) -> CopiedPaths<'a, T> {
        CopiedPaths { paths: self }
    }

    pub(crate) fn current_path(&self) -> &[&'a T] {
        &self.buffer
    }

    fn enter(&mut self, node: &'a TreeNode<T>) {
        self.buffer.push(node.value());
        self.stack.push(node.children().iter());
    }
}

/// Lazily enumerate all root-to-leaf paths under `root`, in pre-order leaf
/// order. An absent root yields no paths.
pub fn enumerate_paths<T>(root: Option<&TreeNode<T>>) -> PathEnumerator<'_, T> {
    PathEnumerator::new(root)
}

/// Standard iterator over owned copies of the enumerated paths, for
/// consumers that retain paths past the next advance.
pub struct CopiedPaths<'a, T> {
    paths: PathEnumerator<'a, T>,
}

impl<'a, T> Iterator for CopiedPaths<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.paths.next_path().map(|path| path.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    // Layout of the tree used by most tests:
    //
    //     1
    //    / \
    //   2   5
    //  / \   \
    // 3   4   6
    fn small_tree() -> TreeNode<u32> {
        let left = TreeNode::with_children(2, [TreeNode::new(3), TreeNode::new(4)]);
        let right = TreeNode::with_children(5, [TreeNode::new(6)]);
        TreeNode::with_children(1, [left, right])
    }

    fn to_values(path: Vec<&u32>) -> Vec<u32> {
        path.into_iter().copied().collect_vec()
    }

    #[test_log::test]
    fn test_paths_in_preorder() {
        let tree = small_tree();
        let result = tree.paths().copied().map(to_values).collect_vec();
        assert_eq!(result, vec![vec![1, 2, 3], vec![1, 2, 4], vec![1, 5, 6]]);
    }

    #[test_log::test]
    fn test_one_path_per_leaf() {
        let tree = small_tree();
        assert_eq!(tree.paths().copied().count(), 3);

        let leaves = tree
            .paths()
            .copied()
            .map(|path| **path.last().unwrap())
            .collect_vec();
        assert_eq!(leaves, &[3, 4, 6]);
    }

    #[test_log::test]
    fn test_single_leaf_root() {
        let tree = TreeNode::new(7);
        let mut paths = tree.paths();
        assert_eq!(paths.next_path(), Some([&7].as_slice()));
        assert_eq!(paths.next_path(), None);
        // fused
        assert_eq!(paths.next_path(), None);
    }

    #[test_log::test]
    fn test_absent_root_yields_nothing() {
        let mut paths = enumerate_paths::<u32>(None);
        assert_eq!(paths.next_path(), None);
    }

    #[test_log::test]
    fn test_vacant_slots_are_skipped() {
        let root = TreeNode::with_child_slots(
            1,
            [None, Some(TreeNode::new(2)), None, Some(TreeNode::new(3)), None],
        );
        let result = root.paths().copied().map(to_values).collect_vec();
        assert_eq!(result, vec![vec![1, 2], vec![1, 3]]);
    }

    #[test_log::test]
    fn test_all_vacant_node_produces_no_path() {
        // The middle child has only vacant slots. It is not a leaf, so it
        // must not surface as a path of its own.
        let root = TreeNode::with_children(
            1,
            [
                TreeNode::new(2),
                TreeNode::with_child_slots(3, [None, None]),
                TreeNode::new(4),
            ],
        );
        let result = root.paths().copied().map(to_values).collect_vec();
        assert_eq!(result, vec![vec![1, 2], vec![1, 4]]);
    }

    #[test_log::test]
    fn test_buffer_is_reused_across_yields() {
        let tree = small_tree();
        let mut paths = PathEnumerator::with_depth_hint(Some(&tree), 8);

        // With a sufficient hint the buffer never re-allocates, so every
        // yield lends a view into the same allocation.
        let first = paths.next_path().unwrap().as_ptr();
        let mut count = 1;
        while let Some(path) = paths.next_path() {
            assert_eq!(path.as_ptr(), first);
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[test_log::test]
    fn test_depth_tracks_the_buffer() {
        let tree = small_tree();
        let mut paths = tree.paths();
        assert_eq!(paths.depth(), 0);
        paths.next_path();
        assert_eq!(paths.depth(), 3);
    }
}
