//! Recursive visitation of root-to-leaf paths with a bounded descent.
//!
//! [visit_paths] is the call-stack rendition of the traversal in
//! [crate::paths]: same pre-order leaf order, same backtracking buffer,
//! but the descent recurses and therefore accepts an explicit depth limit.
//! Exceeding the limit surfaces as a resource error rather than as a stack
//! overflow. The iterative [crate::PathEnumerator] is the unbounded
//! alternative.

use crate::errors::TreepathError;
use crate::node::TreeNode;
use tracing::{debug, instrument};

/// Visits every root-to-leaf path under `root` in pre-order leaf order,
/// invoking `on_path` once per leaf with the full path.
///
/// The slice handed to the callback borrows the traversal's shared buffer
/// and is only valid for the duration of the call; copy it if it must be
/// retained. An absent root is treated as an empty tree and visits nothing.
///
/// `depth_limit` bounds the number of nodes on any root-to-leaf path.
/// Descending past it aborts the whole visit with
/// [TreepathError::DepthLimitExceeded].
#[instrument(level = "trace", skip(root, on_path))]
pub fn visit_paths<T, F>(
    root: Option<&TreeNode<T>>,
    depth_limit: usize,
    mut on_path: F,
) -> Result<(), TreepathError>
where
    F: FnMut(&[&T]),
{
    match root {
        Some(root) => {
            let mut buffer = Vec::with_capacity(depth_limit);
            descend(root, depth_limit, &mut buffer, &mut on_path)
        }
        None => Ok(()),
    }
}

fn descend<'a, T, F>(
    node: &'a TreeNode<T>,
    depth_limit: usize,
    buffer: &mut Vec<&'a T>,
    on_path: &mut F,
) -> Result<(), TreepathError>
where
    F: FnMut(&[&T]),
{
    if buffer.len() == depth_limit {
        debug!(depth_limit, "descent reached the depth limit");
        return Err(TreepathError::DepthLimitExceeded(depth_limit));
    }
    buffer.push(node.value());
    if node.is_leaf() {
        on_path(buffer);
    } else {
        for child in node.children().iter().flatten() {
            descend(child, depth_limit, buffer, on_path)?;
        }
    }
    buffer.pop();
    Ok(())
}
