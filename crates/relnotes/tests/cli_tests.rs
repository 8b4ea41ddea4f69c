// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for relnotes
//!
//! Flag parsing is checked through `Config`; end-to-end runs execute the
//! built binary against scaffolded repositories.


use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use clap::Parser;
use relnotes::config::{Backend, Config};
use similar_asserts::assert_eq;
use tracing::Level;

use test_utils::{TempTestDir, TestGitRepo, git_available};

// ============================================================================
// Flag parsing
// ============================================================================

#[test]
fn test_no_arguments() {
    let config = Config::try_parse_from(["relnotes"]).expect("parse should succeed");
    assert!(config.repo.is_none());
    assert!(config.summary.is_none());
    assert!(config.max_tags.is_none());
    assert!(!config.verbose);
    assert!(!config.quiet);
}

#[test]
fn test_repo_short_flag() {
    let config =
        Config::try_parse_from(["relnotes", "-C", "/srv/project"]).expect("parse should succeed");
    assert_eq!(config.start_dir(), PathBuf::from("/srv/project"));
}

#[test]
fn test_summary_and_max_tags() {
    let config = Config::try_parse_from([
        "relnotes",
        "--summary",
        "docs/OVERVIEW.md",
        "--max-tags",
        "5",
    ])
    .expect("parse should succeed");
    let options = config.assemble_options();
    assert_eq!(options.summary_file, PathBuf::from("docs/OVERVIEW.md"));
    assert_eq!(options.max_tags, 5);
}

#[test]
fn test_max_tags_rejects_non_number() {
    let result = Config::try_parse_from(["relnotes", "--max-tags", "three"]);
    assert!(result.is_err());
}

#[test]
fn test_backend_values() {
    let config = Config::try_parse_from(["relnotes", "--backend", "libgit2"])
        .expect("parse should succeed");
    assert_eq!(config.backend, Backend::Libgit2);

    let config = Config::try_parse_from(["relnotes", "--backend", "git-cli"])
        .expect("parse should succeed");
    assert_eq!(config.backend, Backend::GitCli);

    assert!(Config::try_parse_from(["relnotes", "--backend", "svn"]).is_err());
}

#[test]
fn test_verbose_sets_debug_log_level() {
    let config = Config::try_parse_from(["relnotes", "-v"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_quiet_sets_warn_log_level() {
    let config = Config::try_parse_from(["relnotes", "--quiet"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::WARN);
}

#[test]
fn test_verbose_takes_precedence_over_quiet() {
    let config = Config::try_parse_from(["relnotes", "-v", "-q"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_repo_path_must_be_directory() {
    let dir = TempTestDir::new("repo-is-file");
    let file = dir.create_file("not-a-dir", "");
    let config = Config {
        repo: Some(file),
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().starts_with("Repository path is not a directory"));
}

// ============================================================================
// End-to-end
// ============================================================================

fn relnotes(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_relnotes"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to run relnotes")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

/// Four releases with fixes in between and unreleased work on top
fn four_release_repo(test_name: &str) -> TestGitRepo {
    let mut repo = TestGitRepo::new(test_name);
    repo.write_file("SUMMARY.md", "# Demo\n\nA demo project.\n");
    repo.commit_tagged("Initial release", "v0.1.0");
    repo.commit("Fix build");
    repo.commit_tagged("Add widgets", "v0.2.0");
    repo.commit_tagged("Add gadgets", "v0.3.0");
    repo.commit("Polish docs");
    repo.commit_tagged("Stabilize API", "v1.0.0");
    repo.commit("Start next cycle");
    repo
}

fn listed_shas(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|l| l.strip_prefix("- "))
        .map(|l| l.split(' ').next().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_end_to_end_lists_three_releases() {
    if !git_available() {
        eprintln!("git executable not found, skipping");
        return;
    }

    let repo = four_release_repo("e2e-three");
    let output = relnotes(repo.path(), &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let text = stdout(&output);
    let headings: Vec<&str> = text.lines().filter(|l| l.starts_with("#### ")).collect();
    let subjects: Vec<&str> = text
        .lines()
        .filter_map(|l| l.strip_prefix("- "))
        .map(|l| l.split_once(' ').map_or("", |(_, subject)| subject))
        .collect();

    assert!(text.starts_with("# Demo\n\nA demo project.\n## Recent Changes\n- "));
    assert_eq!(headings, vec!["#### v1.0.0", "#### v0.3.0", "#### v0.2.0"]);
    assert_eq!(
        subjects,
        vec![
            "Start next cycle",
            "Stabilize API",
            "Polish docs",
            "Add gadgets",
            "Add widgets",
            "Fix build",
        ]
    );
}

#[test]
fn test_end_to_end_from_subdirectory() {
    if !git_available() {
        eprintln!("git executable not found, skipping");
        return;
    }

    let repo = four_release_repo("e2e-subdir");
    let nested = repo.write_file("src/lib/mod.txt", "");
    let nested_dir = nested.parent().expect("parent dir");

    let from_root = relnotes(repo.path(), &[]);
    let from_nested = relnotes(nested_dir, &[]);
    assert!(from_nested.status.success());
    assert_eq!(stdout(&from_root), stdout(&from_nested));
}

#[test]
fn test_end_to_end_backends_agree() {
    if !git_available() {
        eprintln!("git executable not found, skipping");
        return;
    }

    let repo = four_release_repo("e2e-backends");
    let cli = relnotes(repo.path(), &["--backend", "git-cli"]);
    let lib = relnotes(repo.path(), &["--backend", "libgit2"]);
    assert!(cli.status.success());
    assert!(lib.status.success());
    assert_eq!(stdout(&cli), stdout(&lib));
}

#[test]
fn test_end_to_end_is_idempotent() {
    if !git_available() {
        eprintln!("git executable not found, skipping");
        return;
    }

    let repo = four_release_repo("e2e-idempotent");
    let first = relnotes(repo.path(), &[]);
    let second = relnotes(repo.path(), &[]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_end_to_end_max_tags() {
    if !git_available() {
        eprintln!("git executable not found, skipping");
        return;
    }

    let repo = four_release_repo("e2e-max-tags");
    let all = relnotes(repo.path(), &["--max-tags", "10"]);
    let one = relnotes(repo.path(), &["--max-tags", "1"]);

    assert_eq!(listed_shas(&stdout(&all)).len(), 7);
    assert_eq!(listed_shas(&stdout(&one)).len(), 2);
}

#[test]
fn test_end_to_end_missing_summary_fails() {
    if !git_available() {
        eprintln!("git executable not found, skipping");
        return;
    }

    let mut repo = TestGitRepo::new("e2e-no-summary");
    repo.commit("Initial commit");

    let output = relnotes(repo.path(), &[]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(String::from_utf8_lossy(&output.stderr).contains("SUMMARY.md"));
}

#[test]
fn test_end_to_end_outside_repository_fails() {
    let dir = TempTestDir::new("e2e-outside");
    let probe = Command::new("git")
        .current_dir(dir.path())
        .args(["rev-parse", "--show-toplevel"])
        .output();
    // The system temp dir might itself live inside a repository
    if probe.is_ok_and(|o| o.status.success()) {
        return;
    }

    let output = relnotes(dir.path(), &[]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_end_to_end_zero_max_tags_rejected() {
    let dir = TempTestDir::new("e2e-zero-tags");
    let output = relnotes(dir.path(), &["--max-tags", "0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--max-tags must be at least 1"));
}
