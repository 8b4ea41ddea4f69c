// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for relnotes-git

use thiserror::Error;

/// Errors that can occur while querying a repository
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Repository not found at the specified path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// Repository has no working directory to hold a summary document
    #[error("Repository is bare: {path}")]
    BareRepository {
        /// Path to the repository's git directory
        path: String,
    },

    /// Invalid commit reference (branch, tag, or SHA)
    #[error("Invalid commit reference: {reference}")]
    InvalidReference {
        /// The reference string that could not be resolved
        reference: String,
    },

    /// The git executable could not be started
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        /// The command line that was attempted
        command: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The git executable exited unsuccessfully
    #[error("`{command}` failed (exit code {code:?}): {stderr}")]
    CommandFailed {
        /// The command line that was run
        command: String,
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
        /// Trimmed standard error output
        stderr: String,
    },

    /// The git executable printed something that is not UTF-8
    #[error("`{command}` produced invalid UTF-8: {source}")]
    InvalidUtf8 {
        /// The command line that was run
        command: String,
        /// Underlying conversion error
        source: std::string::FromUtf8Error,
    },
}

/// Errors that can occur while parsing a commit log line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogLineError {
    /// Line does not have the `[<decorations>] <hash> <subject>` shape
    #[error("Malformed commit log line: {line:?}")]
    Malformed {
        /// The offending line, untrimmed
        line: String,
    },
}
