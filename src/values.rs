//! Flattening of enumerated paths into a plain value sequence.
//!
//! No traversal logic of its own: [ValueEnumerator] drives a
//! [PathEnumerator] and re-yields each path's values in order, root value
//! first, leaf value last, before moving on to the next path. Draining every
//! path completely before the producer resumes is exactly the consumption
//! pattern the shared path buffer allows, and since the yielded references
//! point into the tree rather than into the buffer, the result is a plain
//! [Iterator].

use crate::node::TreeNode;
use crate::paths::PathEnumerator;

/// Lazily yields every node value on every root-to-leaf path, path by path,
/// in pre-order leaf order.
pub struct ValueEnumerator<'a, T> {
    paths: PathEnumerator<'a, T>,
    /// Next position to yield within the current path.
    cursor: usize,
}

impl<'a, T> ValueEnumerator<'a, T> {
    /// Constructor. An absent root is treated as an empty tree: the
    /// enumeration yields no values.
    pub fn new(root: Option<&'a TreeNode<T>>) -> Self {
        ValueEnumerator {
            paths: PathEnumerator::new(root),
            cursor: 0,
        }
    }
}

impl<'a, T> Iterator for ValueEnumerator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(&value) = self.paths.current_path().get(self.cursor) {
                self.cursor += 1;
                return Some(value);
            }
            // current path drained (or nothing produced yet), advance
            self.paths.next_path()?;
            self.cursor = 0;
        }
    }
}

/// Lazily enumerate the values on all root-to-leaf paths under `root`. An
/// absent root yields no values.
pub fn enumerate_values<T>(root: Option<&TreeNode<T>>) -> ValueEnumerator<'_, T> {
    ValueEnumerator::new(root)
}
