//! Read-only git queries
//!
//! The resolver needs exactly two facts about a page: whether it is
//! staged, and when its last commit landed. Both are exposed through
//! the `VersionControl` trait so the resolver can be tested without a
//! repository; `GitCli` is the real implementation and shells out to
//! the `git` binary in the site directory.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// Result type for version-control queries
pub type GitResult<T> = Result<T, GitError>;

/// Version-control query errors
#[derive(Error, Debug)]
pub enum GitError {
    /// The git binary could not be launched at all
    #[error("failed to launch git: {0}")]
    Launch(std::io::Error),

    /// git ran but exited non-zero (missing repository, bad pathspec, ...)
    #[error("git exited with status {code}: {stderr}")]
    Exit { code: i32, stderr: String },

    /// git produced a timestamp the date parser rejected
    #[error("unparseable commit timestamp '{0}'")]
    BadTimestamp(String),
}

/// Abstract version-control interface
///
/// Both queries are read-only and take the page name relative to the
/// site directory, never a resolved absolute path.
pub trait VersionControl {
    /// Does the index hold uncommitted changes for this path?
    fn is_staged(&self, path: &str) -> GitResult<bool>;

    /// Timestamp of the most recent commit touching this path,
    /// or `None` if no commit ever has.
    fn last_commit_time(&self, path: &str) -> GitResult<Option<DateTime<FixedOffset>>>;
}

/// `git` CLI implementation of `VersionControl`
pub struct GitCli {
    work_dir: PathBuf,
}

impl GitCli {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    fn run(&self, args: &[&str]) -> GitResult<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(GitError::Launch)?;

        if !output.status.success() {
            return Err(GitError::Exit {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl VersionControl for GitCli {
    fn is_staged(&self, path: &str) -> GitResult<bool> {
        let listed = self.run(&["diff", "--cached", "--name-only", "--", path])?;
        Ok(!listed.is_empty())
    }

    fn last_commit_time(&self, path: &str) -> GitResult<Option<DateTime<FixedOffset>>> {
        let stamp = self.run(&["log", "-1", "--format=%ci", "--", path])?;
        if stamp.is_empty() {
            return Ok(None);
        }
        // %ci prints e.g. "2024-03-05 14:30:22 +0100"
        let at = DateTime::parse_from_str(&stamp, "%Y-%m-%d %H:%M:%S %z")
            .map_err(|_| GitError::BadTimestamp(stamp))?;
        Ok(Some(at))
    }
}

/// Scripted version control for testing
#[cfg(test)]
#[derive(Default)]
pub struct MockVcs {
    pub staged: std::collections::HashSet<String>,
    pub commits: std::collections::HashMap<String, DateTime<FixedOffset>>,
    pub staged_query_fails: bool,
    pub log_query_fails: bool,
}

#[cfg(test)]
impl MockVcs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commit(mut self, path: &str, at: DateTime<FixedOffset>) -> Self {
        self.commits.insert(path.to_string(), at);
        self
    }

    pub fn with_staged(mut self, path: &str) -> Self {
        self.staged.insert(path.to_string());
        self
    }
}

#[cfg(test)]
impl VersionControl for MockVcs {
    fn is_staged(&self, path: &str) -> GitResult<bool> {
        if self.staged_query_fails {
            return Err(GitError::Exit {
                code: 128,
                stderr: "fatal: not a git repository".to_string(),
            });
        }
        Ok(self.staged.contains(path))
    }

    fn last_commit_time(&self, path: &str) -> GitResult<Option<DateTime<FixedOffset>>> {
        if self.log_query_fails {
            return Err(GitError::Exit {
                code: 128,
                stderr: "fatal: not a git repository".to_string(),
            });
        }
        Ok(self.commits.get(path).copied())
    }
}
