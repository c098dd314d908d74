//! The owned n-ary tree structure whose paths get enumerated.

use core::fmt;
use itertools::Itertools;

/// One node in an n-ary tree. Every node exclusively owns its children, so
/// the structure is acyclic by construction and traversal needs no cycle
/// checks.
///
/// Children are kept as ordered *slots*: a `None` slot marks a vacant
/// position and is skipped by every traversal in this crate. A node with an
/// empty slot vector is a leaf; a node whose slots are all vacant is not a
/// leaf and simply contributes no paths.
///
/// Trees are built bottom-up, leaves first:
///
/// ```
/// use treepath::TreeNode;
///
/// let left = TreeNode::with_children("l", [TreeNode::new("a"), TreeNode::new("b")]);
/// let root = TreeNode::with_children("root", [left, TreeNode::new("r")]);
///
/// assert_eq!(root.paths().copied().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T> {
    /// The payload carried by this node. Never inspected during traversal.
    value: T,
    /// Ordered child slots. `None` marks a vacant slot.
    children: Vec<Option<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    /// Constructs a leaf carrying `value`.
    pub fn new(value: T) -> Self {
        TreeNode {
            value,
            children: vec![],
        }
    }

    /// Constructs a node with the given children in the given order. Each
    /// child lands in an occupied slot.
    pub fn with_children<I>(value: T, children: I) -> Self
    where
        I: IntoIterator<Item = TreeNode<T>>,
    {
        TreeNode {
            value,
            children: children.into_iter().map(Some).collect(),
        }
    }

    /// Constructs a node from explicit child slots, vacant ones included.
    pub fn with_child_slots<I>(value: T, slots: I) -> Self
    where
        I: IntoIterator<Item = Option<TreeNode<T>>>,
    {
        TreeNode {
            value,
            children: slots.into_iter().collect(),
        }
    }

    /// Appends a child in an occupied slot.
    pub fn push_child(&mut self, child: TreeNode<T>) {
        self.children.push(Some(child));
    }

    /// Appends a slot as-is, which may be vacant.
    pub fn push_slot(&mut self, slot: Option<TreeNode<T>>) {
        self.children.push(slot);
    }

    /// The payload carried by this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The ordered child slots, vacant ones included.
    pub fn children(&self) -> &[Option<TreeNode<T>>] {
        &self.children
    }

    /// A node with an empty slot vector is a leaf. Note that a node whose
    /// slots are all vacant is *not* a leaf.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Lazily enumerate all root-to-leaf paths of the tree rooted here.
    pub fn paths(&self) -> crate::PathEnumerator<'_, T> {
        crate::PathEnumerator::new(Some(self))
    }

    /// Lazily enumerate the values on all root-to-leaf paths, path by path.
    pub fn values(&self) -> crate::ValueEnumerator<'_, T> {
        crate::ValueEnumerator::new(Some(self))
    }
}

impl<T> fmt::Display for TreeNode<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value: {}, children: [{}]",
            self.value,
            self.children
                .iter()
                .flatten()
                .map(|child| child.value.to_string())
                .join(", ")
        )
    }
}
