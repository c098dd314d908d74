//! Provides the error type used throughout this crate.

use thiserror::Error;

/// The error type used throughout this crate.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreepathError {
    /// Raised by [crate::visit_paths] when a descent reaches the configured
    /// depth limit before hitting a leaf.
    #[error("Depth limit {0} exceeded")]
    DepthLimitExceeded(usize),
}
