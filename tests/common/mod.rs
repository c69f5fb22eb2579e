//! Common test utilities for pagestamp integration tests.
//!
//! Provides `TestSite` - an isolated site directory backed by a temp
//! dir, with helpers to seed pages, drive a real git repository with
//! pinned commit dates, and run the pagestamp binary against it.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::Local;
use tempfile::TempDir;

use pagestamp::format_date;

/// Canonical page body carrying a marker with a stale date.
pub const STALE_DATE: &str = "January 1, 2000";

/// Result of running the pagestamp binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated site directory with an optional git repository.
pub struct TestSite {
    dir: TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp site dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write an arbitrary page body.
    pub fn write_page(&self, name: &str, content: &str) {
        std::fs::write(self.path().join(name), content).expect("write page");
    }

    /// Write a page whose marker carries [`STALE_DATE`].
    pub fn write_marker_page(&self, name: &str) {
        self.write_page(name, &marker_page(STALE_DATE));
    }

    pub fn read_page(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).expect("read page")
    }

    /// Initialize a git repository with a throwaway identity.
    pub fn git_init(&self) {
        self.git(&["init", "-q"]);
        self.git(&["config", "user.name", "Test"]);
        self.git(&["config", "user.email", "test@example.com"]);
    }

    pub fn git_add_all(&self) {
        self.git(&["add", "."]);
    }

    /// Commit everything staged, pinning both git dates to `when`
    /// (e.g. `"2024-03-05 12:00:00 +0000"`).
    pub fn git_commit(&self, when: &str) {
        let output = Command::new("git")
            .args(["commit", "-q", "--no-verify", "-m", "snapshot"])
            .current_dir(self.path())
            .env("GIT_AUTHOR_DATE", when)
            .env("GIT_COMMITTER_DATE", when)
            .output()
            .expect("run git commit");
        assert!(
            output.status.success(),
            "git commit failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    fn git(&self, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Run the pagestamp binary in the site directory.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the pagestamp binary with extra environment variables.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut command = Command::new(bin_path());
        command.args(args).current_dir(self.path());
        for (key, value) in env_vars {
            command.env(key, value);
        }
        let output = command.output().expect("run pagestamp binary");
        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Env override that stops git from discovering a repository above
    /// the site directory. Use for the "no repository at all" scenarios.
    pub fn ceiling_env(&self) -> (String, String) {
        let parent = self
            .path()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/"));
        (
            "GIT_CEILING_DIRECTORIES".to_string(),
            parent.display().to_string(),
        )
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

pub fn bin_path() -> &'static str {
    env!("CARGO_BIN_EXE_pagestamp")
}

/// Page body with a single marker carrying the given date text.
pub fn marker_page(date_text: &str) -> String {
    format!(
        "<html><body>\n<h1>Home</h1>\n<p class=\"last-updated\">Last Updated: {}</p>\n</body></html>\n",
        date_text
    )
}

/// Today's date rendered the way pagestamp renders it.
///
/// Tests that expect a fallback-to-now stamp should sample this before
/// and after running the binary and accept either value, so a run that
/// straddles midnight cannot flake.
pub fn today() -> String {
    format_date(&Local::now().fixed_offset())
}
