//! Working tree inspection
//!
//! The [WorkingTree] trait answers one question: which paths have changes that
//! are not yet committed. Guarded operations call [ensure_clean] before doing
//! anything else.
//!
//! - [repository::Git2WorkingTree]: real implementation using the `git2` crate
//! - [mock::MockWorkingTree]: in-memory implementation for testing

pub mod mock;
pub mod repository;

pub use mock::MockWorkingTree;
pub use repository::Git2WorkingTree;

use crate::error::{BumpError, Result};

/// Source of working tree status
pub trait WorkingTree {
    /// Paths with pending changes, relative to the repository root.
    ///
    /// Covers staged and unstaged modifications, deletions, renames, type
    /// changes, conflicts and untracked files. Ignored files are never
    /// reported. An empty list means the tree is clean.
    fn pending_changes(&self) -> Result<Vec<String>>;
}

/// Fail with [BumpError::DirtyWorkingTree] unless the tree has no pending changes.
pub fn ensure_clean<W: WorkingTree + ?Sized>(tree: &W) -> Result<()> {
    let paths = tree.pending_changes()?;
    if paths.is_empty() {
        tracing::debug!("working tree is clean");
        return Ok(());
    }

    for path in &paths {
        tracing::debug!(%path, "pending change");
    }
    Err(BumpError::DirtyWorkingTree { paths })
}
