// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the relnotes command
//!
//! Every option has a default, so running `relnotes` with no arguments reads
//! `SUMMARY.md` from the root of the enclosing repository and lists the three
//! most recent tagged releases using the `git` executable.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use relnotes_git::{GitCli, GitError, GitRepo, HistorySource};

use crate::assemble::{AssembleOptions, DEFAULT_MAX_TAGS, DEFAULT_SUMMARY_FILE};

/// Relnotes - print a release README with recent changes from git history
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "relnotes")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Directory to start looking for the repository from
    ///
    /// Defaults to the current working directory.
    #[arg(short = 'C', long)]
    pub repo: Option<PathBuf>,

    /// Summary document to print first, relative to the repository root
    ///
    /// Defaults to SUMMARY.md.
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Number of tagged releases to list under "Recent Changes"
    ///
    /// Defaults to 3.
    #[arg(long)]
    pub max_tags: Option<usize>,

    /// How to read repository history
    #[arg(long, value_enum, default_value_t = Backend::GitCli)]
    pub backend: Backend,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the README on stdout.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// History source implementations
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    /// Run the `git` executable
    #[default]
    GitCli,
    /// Read the repository in-process with libgit2
    Libgit2,
}

impl Config {
    /// Directory repository discovery starts from
    #[must_use]
    pub fn start_dir(&self) -> PathBuf {
        self.repo.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Summary document path relative to the repository root
    #[must_use]
    pub fn summary_file(&self) -> PathBuf {
        self.summary
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SUMMARY_FILE))
    }

    /// Number of tagged releases to list
    #[must_use]
    pub fn max_tags(&self) -> usize {
        self.max_tags.unwrap_or(DEFAULT_MAX_TAGS)
    }

    /// Options for [`crate::assemble::assemble`]
    #[must_use]
    pub fn assemble_options(&self) -> AssembleOptions {
        AssembleOptions {
            summary_file: self.summary_file(),
            max_tags: self.max_tags(),
        }
    }

    /// Open the configured history source
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the libgit2 backend cannot find a repository.
    /// The `git` executable backend defers all failures to its first query.
    pub fn history_source(&self) -> Result<Box<dyn HistorySource>, GitError> {
        let start = self.start_dir();
        let source: Box<dyn HistorySource> = match self.backend {
            Backend::GitCli => Box::new(GitCli::new(start)),
            Backend::Libgit2 => Box::new(GitRepo::discover(start)?),
        };
        Ok(source)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repository path is specified but doesn't exist or isn't a directory
    /// - `--max-tags` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref repo) = self.repo {
            if !repo.exists() {
                return Err(ConfigError::RepoPathNotFound(repo.clone()));
            }
            if !repo.is_dir() {
                return Err(ConfigError::RepoPathNotDirectory(repo.clone()));
            }
        }

        if self.max_tags == Some(0) {
            return Err(ConfigError::ZeroMaxTags);
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository start path not found
    #[error("Repository path not found: {0}")]
    RepoPathNotFound(PathBuf),

    /// Repository start path is not a directory
    #[error("Repository path is not a directory: {0}")]
    RepoPathNotDirectory(PathBuf),

    /// At least one tagged release must be listed
    #[error("--max-tags must be at least 1")]
    ZeroMaxTags,
}
