// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit log line parsing
//!
//! Each commit is rendered by `git log` (or by [`crate::GitRepo`]) as a single
//! line of the form `[<decorations>] <short-sha> <subject>`, for example
//! `[ (HEAD -> main, tag: v1.2.0)] abc1234 Fix crash on empty input`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::LogLineError;

/// `git log --pretty=format:` string that produces one parseable line per commit
pub const LOG_FORMAT: &str = "[%d] %h %s";

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([^\]]*)\] (\S+) (.+)$").expect("commit line pattern is valid")
});

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(tag: ([^\)]+)\)").expect("tag pattern is valid"));

/// A single parsed commit log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// Decoration text with surrounding whitespace removed, e.g. `(tag: v1.0)`
    pub decorations: String,
    /// Abbreviated commit hash
    pub short_sha: String,
    /// Commit subject
    pub subject: String,
}

impl LogLine {
    /// Parse a line produced with [`LOG_FORMAT`]
    ///
    /// Leading and trailing whitespace on the line is ignored.
    ///
    /// # Errors
    ///
    /// Returns `LogLineError::Malformed` if the line does not match
    /// `[<decorations>] <short-sha> <subject>`.
    pub fn parse(line: &str) -> Result<Self, LogLineError> {
        let caps = LINE_PATTERN
            .captures(line.trim())
            .ok_or_else(|| LogLineError::Malformed {
                line: line.to_string(),
            })?;

        Ok(Self {
            decorations: caps[1].trim().to_string(),
            short_sha: caps[2].to_string(),
            subject: caps[3].to_string(),
        })
    }

    /// The tag this commit is decorated with, if any
    ///
    /// Only a decoration list that opens with a tag is recognised, so
    /// `(tag: v1.0, origin/main)` yields `v1.0` while
    /// `(HEAD -> main, tag: v1.0)` yields nothing.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        TAG_PATTERN
            .captures(&self.decorations)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Check if this commit starts a new tagged release
    #[must_use]
    pub fn is_tag_boundary(&self) -> bool {
        self.tag().is_some()
    }
}
