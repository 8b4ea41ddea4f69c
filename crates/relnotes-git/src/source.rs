// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The read-only view of a repository that release notes are built from

use std::path::PathBuf;

use crate::error::GitError;

/// Read-only access to a repository's location and history
///
/// Implemented by [`crate::GitCli`] and [`crate::GitRepo`]; tests provide
/// canned implementations.
pub trait HistorySource {
    /// Absolute path of the repository's working tree root
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the root cannot be resolved.
    fn repository_root(&self) -> Result<PathBuf, GitError>;

    /// Commit history, newest first, one [`crate::LOG_FORMAT`] line per commit
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the history cannot be read.
    fn commit_log(&self) -> Result<String, GitError>;
}

impl<T: HistorySource + ?Sized> HistorySource for &T {
    fn repository_root(&self) -> Result<PathBuf, GitError> {
        (**self).repository_root()
    }

    fn commit_log(&self) -> Result<String, GitError> {
        (**self).commit_log()
    }
}

impl<T: HistorySource + ?Sized> HistorySource for Box<T> {
    fn repository_root(&self) -> Result<PathBuf, GitError> {
        (**self).repository_root()
    }

    fn commit_log(&self) -> Result<String, GitError> {
        (**self).commit_log()
    }
}
