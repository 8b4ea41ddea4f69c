// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! History source backed by the `git` executable

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::GitError;
use crate::log_line::LOG_FORMAT;
use crate::source::HistorySource;

/// Runs `git` subcommands from a fixed working directory
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
    program: OsString,
}

impl GitCli {
    /// Create a source that runs `git` from `workdir`
    #[must_use]
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        Self {
            workdir: workdir.as_ref().to_path_buf(),
            program: OsString::from("git"),
        }
    }

    /// Use a different executable instead of `git` from `PATH`
    #[must_use]
    pub fn with_program(mut self, program: impl AsRef<OsStr>) -> Self {
        self.program = program.as_ref().to_os_string();
        self
    }

    /// Directory the commands run in
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run a subcommand and return its standard output
    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let command = format!("{} {}", self.program.to_string_lossy(), args.join(" "));
        debug!(command = %command, workdir = %self.workdir.display(), "Running git");

        let output = Command::new(&self.program)
            .current_dir(&self.workdir)
            .args(args)
            .output()
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|source| GitError::InvalidUtf8 { command, source })
    }
}

impl HistorySource for GitCli {
    fn repository_root(&self) -> Result<PathBuf, GitError> {
        let stdout = self.run(&["rev-parse", "--show-toplevel"])?;
        Ok(PathBuf::from(stdout.trim()))
    }

    fn commit_log(&self) -> Result<String, GitError> {
        let format = format!("--pretty=format:{LOG_FORMAT}");
        self.run(&["log", &format])
    }
}
