// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Release README assembly
//!
//! The README is the summary document copied verbatim, a `## Recent Changes`
//! heading, and the newest commits grouped under `#### <tag>` headings. The
//! listing stops at the commit that would open one tag group too many.
//!
//! # Example
//!
//! ```no_run
//! use relnotes::assemble::{assemble, AssembleOptions};
//! use relnotes_git::GitCli;
//!
//! let git = GitCli::new(".");
//! let mut out = std::io::stdout().lock();
//! let report = assemble(&git, &AssembleOptions::default(), &mut out)
//!     .expect("assemble readme");
//! eprintln!("Listed {} commits", report.commits_written);
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use relnotes_git::{GitError, HistorySource, LogLine, LogLineError};
use thiserror::Error;
use tracing::{debug, info};

/// Summary document read when no other is configured
pub const DEFAULT_SUMMARY_FILE: &str = "SUMMARY.md";

/// Number of tagged releases listed when no other limit is configured
pub const DEFAULT_MAX_TAGS: usize = 3;

/// Heading written between the summary and the commit listing
pub const RECENT_CHANGES_HEADING: &str = "## Recent Changes";

// ============================================================================
// Error Types
// ============================================================================

/// Assembly errors
#[derive(Debug, Error)]
pub enum AssembleError {
    /// Repository root or history could not be read
    #[error("Repository query failed: {0}")]
    Environment(#[from] GitError),

    /// Summary document is absent or unreadable
    #[error("Cannot read summary document {}: {source}", path.display())]
    MissingSummary {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// A commit log line does not have the expected shape
    #[error("Commit log line {line_number}: {source}")]
    MalformedLog {
        /// 1-based line number within the commit log
        line_number: usize,
        /// Parse failure for that line
        source: LogLineError,
    },

    /// Writing the README failed
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

// ============================================================================
// Options and Report
// ============================================================================

/// What to read and how much history to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleOptions {
    /// Summary document path, relative to the repository root
    pub summary_file: PathBuf,
    /// Number of tagged releases to list
    pub max_tags: usize,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            summary_file: PathBuf::from(DEFAULT_SUMMARY_FILE),
            max_tags: DEFAULT_MAX_TAGS,
        }
    }
}

/// What the commit listing contained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecentChanges {
    /// Number of `- <sha> <subject>` items written
    pub commits_written: usize,
    /// Number of `#### <tag>` headings written
    pub tags_written: usize,
    /// Whether older history was cut off by the tag limit
    pub truncated: bool,
}

// ============================================================================
// Tag Tracking
// ============================================================================

/// What to do with a commit that carries a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStep<'a> {
    /// The tag limit is exceeded; write nothing more
    Stop,
    /// Open a new group under this tag
    Heading(&'a str),
    /// Tag equals the group already open
    SameGroup,
}

/// Tag boundary accumulator for a single pass over the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTracker {
    max_tags: usize,
    distinct_tag_count: usize,
    last_emitted_tag: Option<String>,
}

impl TagTracker {
    /// Create a tracker that allows `max_tags` tag boundaries
    #[must_use]
    pub fn new(max_tags: usize) -> Self {
        Self {
            max_tags,
            distinct_tag_count: 0,
            last_emitted_tag: None,
        }
    }

    /// Record a tag boundary and decide how to render it
    pub fn observe<'a>(&mut self, tag: &'a str) -> TagStep<'a> {
        self.distinct_tag_count += 1;
        if self.distinct_tag_count > self.max_tags {
            return TagStep::Stop;
        }
        if self.last_emitted_tag.as_deref() == Some(tag) {
            return TagStep::SameGroup;
        }
        self.last_emitted_tag = Some(tag.to_string());
        TagStep::Heading(tag)
    }

    /// Tag boundaries seen so far, including the one that stopped the pass
    #[must_use]
    pub fn distinct_tag_count(&self) -> usize {
        self.distinct_tag_count
    }

    /// Tag of the most recently opened group
    #[must_use]
    pub fn last_emitted_tag(&self) -> Option<&str> {
        self.last_emitted_tag.as_deref()
    }
}

// ============================================================================
// Writers
// ============================================================================

/// Write the summary document verbatim
///
/// A newline is appended only when the text is non-empty and lacks one, so
/// whatever follows starts on its own line.
///
/// # Errors
///
/// Returns `io::Error` if writing fails.
pub fn write_summary<W: Write + ?Sized>(summary: &str, out: &mut W) -> io::Result<()> {
    out.write_all(summary.as_bytes())?;
    if !summary.is_empty() && !summary.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Write the tag-grouped commit listing for a newest-first commit log
///
/// Whitespace-only lines are skipped. Lines already written stay written
/// when a later line fails to parse.
///
/// # Errors
///
/// Returns `AssembleError::MalformedLog` for the first line that does not
/// parse, or `AssembleError::Output` if writing fails.
pub fn write_recent_changes<W: Write + ?Sized>(
    log: &str,
    max_tags: usize,
    out: &mut W,
) -> Result<RecentChanges, AssembleError> {
    let mut tracker = TagTracker::new(max_tags);
    let mut report = RecentChanges::default();

    for (index, raw) in log.lines().enumerate() {
        let line_number = index + 1;
        if raw.trim().is_empty() {
            debug!(line_number, "Skipping blank commit log line");
            continue;
        }

        let entry = LogLine::parse(raw)
            .map_err(|source| AssembleError::MalformedLog {
                line_number,
                source,
            })?;

        if let Some(tag) = entry.tag() {
            match tracker.observe(tag) {
                TagStep::Stop => {
                    debug!(tag, line_number, "Tag limit reached");
                    report.truncated = true;
                    break;
                }
                TagStep::Heading(tag) => {
                    writeln!(out)?;
                    writeln!(out, "#### {tag}")?;
                    report.tags_written += 1;
                }
                TagStep::SameGroup => {}
            }
        }

        writeln!(out, "- {} {}", entry.short_sha, entry.subject)?;
        report.commits_written += 1;
    }

    Ok(report)
}

/// Assemble the full README from a history source
///
/// Resolves the repository root, copies the summary document, writes the
/// `## Recent Changes` heading, then lists recent commits.
///
/// # Errors
///
/// Returns `AssembleError` on the first failure. Nothing is retried and
/// output already written is not retracted.
pub fn assemble<S, W>(
    source: &S,
    options: &AssembleOptions,
    out: &mut W,
) -> Result<RecentChanges, AssembleError>
where
    S: HistorySource + ?Sized,
    W: Write + ?Sized,
{
    let root = source.repository_root()?;
    info!(root = %root.display(), "Resolved repository root");

    let summary_path = root.join(&options.summary_file);
    let summary =
        fs::read_to_string(&summary_path).map_err(|source| AssembleError::MissingSummary {
            path: summary_path.clone(),
            source,
        })?;
    debug!(path = %summary_path.display(), bytes = summary.len(), "Read summary document");

    write_summary(&summary, out)?;
    writeln!(out, "{RECENT_CHANGES_HEADING}")?;

    let log = source.commit_log()?;
    let report = write_recent_changes(&log, options.max_tags, out)?;

    info!(
        commits = report.commits_written,
        tags = report.tags_written,
        truncated = report.truncated,
        "Wrote recent changes"
    );
    Ok(report)
}
