//! ## About
//!
//! This crate enumerates all root-to-leaf paths of an n-ary tree ([TreeNode])
//! lazily, one path at a time, instead of collecting them eagerly into a list
//! of lists. A single mutable path buffer is shared across the whole
//! traversal: entering a node appends its value, leaving it pops the value
//! again, and at each leaf the buffer *is* the root-to-leaf path. This keeps
//! the auxiliary memory at O(depth) regardless of how many leaves the tree
//! has.
//!
//! The price of the reuse is an aliasing constraint: what
//! [PathEnumerator::next_path] hands out is a borrow of that buffer, not a
//! copy, and its contents are rewritten by the next advance. The borrow
//! checker turns this constraint into a compile-time rule, so the yielded
//! slice cannot outlive the next call. Consumers that need to retain paths go
//! through [PathEnumerator::copied], which clones each path before the
//! producer resumes. [ValueEnumerator] flattens paths into single values and
//! fully drains each path before advancing, so it composes with the standard
//! iterator machinery without any copies.
//!
//! ```
//! use treepath::TreeNode;
//!
//! let root = TreeNode::with_children(1, [TreeNode::new(2), TreeNode::new(3)]);
//!
//! let mut paths = root.paths();
//! while let Some(path) = paths.next_path() {
//!     println!("{path:?}"); // [1, 2], then [1, 3]
//! }
//! ```
//!
//! ## Naming conventions
//! * Structs – substantives that indicate the entity implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories,
//!   which use substantives (i.e., omit a `get_` prefix) much like the
//!   standard library

pub mod errors;
pub mod node;
pub mod paths;
pub mod values;
pub mod visit;

pub use errors::TreepathError;
pub use node::TreeNode;
pub use paths::{enumerate_paths, CopiedPaths, PathEnumerator};
pub use values::{enumerate_values, ValueEnumerator};
pub use visit::visit_paths;
