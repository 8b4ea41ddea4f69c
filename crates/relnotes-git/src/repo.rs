// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! History source backed by libgit2
//!
//! Renders the same one-line-per-commit log as `git log --pretty=format:[%d] %h %s`
//! without requiring a `git` executable.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use git2::{Oid, Repository, Sort};
use tracing::debug;

use crate::error::GitError;
use crate::source::HistorySource;

/// A git repository wrapper for reading decorated history
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Discover and open a git repository containing the given path
    ///
    /// This walks up the directory tree to find a `.git` directory.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Check if the repository is bare
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.repo.is_bare()
    }

    /// Get the working directory path (None for bare repos)
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Get the HEAD commit SHA
    ///
    /// # Errors
    ///
    /// Returns `GitError` if HEAD cannot be resolved.
    pub fn head_sha(&self) -> Result<String, GitError> {
        let head = self.repo.head()?;
        let oid = head.target().ok_or_else(|| GitError::InvalidReference {
            reference: "HEAD".to_string(),
        })?;
        Ok(oid.to_string())
    }

    /// Build the `%d`-style decoration labels for every decorated commit
    ///
    /// Labels per commit follow git's ordering: `HEAD -> <branch>` (or a bare
    /// `HEAD` when detached) first, then the remaining refs in descending
    /// refname order.
    fn decorations(&self) -> Result<HashMap<Oid, Vec<String>>, GitError> {
        let mut refs: Vec<(String, Oid, String)> = Vec::new();

        for reference in self.repo.references()? {
            let reference = reference?;
            let Some(name) = reference.name() else {
                continue;
            };

            let label = if let Some(tag) = name.strip_prefix("refs/tags/") {
                format!("tag: {tag}")
            } else if let Some(branch) = name.strip_prefix("refs/heads/") {
                branch.to_string()
            } else if let Some(remote) = name.strip_prefix("refs/remotes/") {
                remote.to_string()
            } else {
                continue;
            };

            // Tags may point at trees or blobs; those never decorate a commit
            let Ok(commit) = reference.peel_to_commit() else {
                continue;
            };
            refs.push((name.to_string(), commit.id(), label));
        }

        refs.sort_by(|a, b| a.0.cmp(&b.0));

        let mut by_commit: HashMap<Oid, Vec<String>> = HashMap::new();
        for (_, oid, label) in refs.into_iter().rev() {
            by_commit.entry(oid).or_default().push(label);
        }

        if let Ok(head) = self.repo.head() {
            if let Ok(commit) = head.peel_to_commit() {
                let labels = by_commit.entry(commit.id()).or_default();
                if self.repo.head_detached()? {
                    labels.insert(0, "HEAD".to_string());
                } else {
                    let branch = head.shorthand().unwrap_or("HEAD").to_string();
                    labels.retain(|label| *label != branch);
                    labels.insert(0, format!("HEAD -> {branch}"));
                }
            }
        }

        Ok(by_commit)
    }
}

impl HistorySource for GitRepo {
    fn repository_root(&self) -> Result<PathBuf, GitError> {
        let workdir = self.workdir().ok_or_else(|| GitError::BareRepository {
            path: self.repo.path().display().to_string(),
        })?;
        // Drop the trailing separator libgit2 keeps on workdir paths
        Ok(workdir.components().collect())
    }

    fn commit_log(&self) -> Result<String, GitError> {
        let decorations = self.decorations()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_head()?;

        let mut lines = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;
            let short_id = commit.as_object().short_id()?;

            let decoration = decorations
                .get(&oid)
                .map(|labels| format!(" ({})", labels.join(", ")))
                .unwrap_or_default();

            lines.push(format!(
                "[{}] {} {}",
                decoration,
                short_id.as_str().unwrap_or_default(),
                commit.summary().unwrap_or_default()
            ));
        }

        debug!(commits = lines.len(), "Rendered commit log with libgit2");
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_nonexistent_repository() {
        let result = GitRepo::open("/nonexistent/path");
        assert!(result.is_err());
        match result {
            Err(GitError::RepositoryNotFound { path }) => {
                assert!(path.contains("nonexistent"));
            }
            _ => panic!("Expected RepositoryNotFound error"),
        }
    }

    #[test]
    fn test_discover_nonexistent_repository() {
        assert!(matches!(
            GitRepo::discover("/nonexistent/relnotes/path"),
            Err(GitError::RepositoryNotFound { .. })
        ));
    }
}
