//! Commit-date resolution policy
//!
//! Every page gets a timestamp from one of four sources:
//!
//! - `Staged` - the index holds uncommitted changes, use "now"
//! - `Commit` - the most recent commit touching the page
//! - `NoHistory` - the page was never committed, use "now" silently
//! - `QueryFailed` - the log query errored, use "now" and warn
//!
//! The resolver decides only *which* timestamp to use. Whether to log a
//! warning is read off the source by the caller, keeping the two
//! concerns independently testable.

use chrono::{DateTime, FixedOffset};

use crate::git::VersionControl;

/// Where a resolved timestamp came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    Staged,
    Commit,
    NoHistory,
    QueryFailed,
}

/// A timestamp plus the provenance the caller needs for reporting.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedDate {
    pub at: DateTime<FixedOffset>,
    pub source: DateSource,
}

impl ResolvedDate {
    /// Only a failed log query earns a console warning; absent history
    /// falls back silently.
    pub fn needs_warning(&self) -> bool {
        self.source == DateSource::QueryFailed
    }
}

/// Resolve the timestamp to stamp into `path`.
///
/// A failing staged-check degrades silently to "not staged" and the log
/// query still runs; only a failing log query is reported as
/// `QueryFailed`.
pub fn resolve_date(
    vcs: &dyn VersionControl,
    path: &str,
    now: DateTime<FixedOffset>,
) -> ResolvedDate {
    if vcs.is_staged(path).unwrap_or(false) {
        return ResolvedDate {
            at: now,
            source: DateSource::Staged,
        };
    }

    match vcs.last_commit_time(path) {
        Ok(Some(at)) => ResolvedDate {
            at,
            source: DateSource::Commit,
        },
        Ok(None) => ResolvedDate {
            at: now,
            source: DateSource::NoHistory,
        },
        Err(_) => ResolvedDate {
            at: now,
            source: DateSource::QueryFailed,
        },
    }
}
