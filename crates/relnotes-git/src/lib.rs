// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! relnotes-git: commit log access for relnotes
//!
//! This library crate reads the decorated, one-line-per-commit history of a
//! repository and parses each line into a [`LogLine`]. History is reached
//! through the [`HistorySource`] trait, with two backends: [`GitCli`], which
//! shells out to the `git` executable, and [`GitRepo`], which uses libgit2.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use relnotes_git::{GitCli, HistorySource, LogLine};
//!
//! let git = GitCli::new(".");
//! let log = git.commit_log().expect("read log");
//!
//! for line in log.lines() {
//!     let entry = LogLine::parse(line).expect("well-formed line");
//!     println!("{} {:?}", entry.short_sha, entry.tag());
//! }
//! ```

pub mod cli;
pub mod error;
pub mod log_line;
pub mod repo;
pub mod source;

pub use cli::GitCli;
pub use error::{GitError, LogLineError};
pub use log_line::{LOG_FORMAT, LogLine};
pub use repo::GitRepo;
pub use source::HistorySource;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::cli::GitCli;
    pub use crate::error::{GitError, LogLineError};
    pub use crate::log_line::LogLine;
    pub use crate::repo::GitRepo;
    pub use crate::source::HistorySource;
}
