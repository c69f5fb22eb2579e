//! Per-page update pipeline
//!
//! One page goes through: existence check, read, commit-date
//! resolution, marker rewrite, conditional write-back. The outcome is
//! returned as data; rendering console lines is the caller's job.
//!
//! The commit date is resolved before the marker search, so a failed
//! git query is reported even for a page that then turns out to have no
//! marker.

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};

use crate::datefmt::format_date;
use crate::fs::FileSystem;
use crate::git::VersionControl;
use crate::marker::Marker;
use crate::resolve::resolve_date;

/// What happened to one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Marker found and rewritten with the given date text
    Updated { date: String },
    /// Page exists but carries no marker element; nothing written
    MarkerMissing,
    /// Page absent from the site directory; nothing written
    FileMissing,
    /// Read or write failed; nothing (or nothing durable) written
    Failed { message: String },
}

/// Outcome of one page plus the fallback flag for warning lines.
#[derive(Debug, Clone)]
pub struct PageReport {
    pub file: String,
    pub outcome: UpdateOutcome,
    /// True when the git query errored and "now" was substituted
    pub date_fallback: bool,
}

/// Stamps one page at a time against an injected filesystem and
/// version control.
pub struct Updater<'a> {
    fs: &'a dyn FileSystem,
    vcs: &'a dyn VersionControl,
    marker: Marker,
    base: PathBuf,
    dry_run: bool,
}

impl<'a> Updater<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        vcs: &'a dyn VersionControl,
        base: PathBuf,
        dry_run: bool,
    ) -> Self {
        Self {
            fs,
            vcs,
            marker: Marker::new(),
            base,
            dry_run,
        }
    }

    /// Update a single page, identified by its name relative to the
    /// site directory. The relative name is also the version-control
    /// lookup key.
    pub fn update_page(&self, name: &str, now: DateTime<FixedOffset>) -> PageReport {
        let path = self.base.join(name);

        if !self.fs.exists(&path) {
            return PageReport {
                file: name.to_string(),
                outcome: UpdateOutcome::FileMissing,
                date_fallback: false,
            };
        }

        let content = match self.fs.read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                return PageReport {
                    file: name.to_string(),
                    outcome: UpdateOutcome::Failed {
                        message: e.to_string(),
                    },
                    date_fallback: false,
                }
            }
        };

        let resolved = resolve_date(self.vcs, name, now);
        let date_fallback = resolved.needs_warning();
        let date = format_date(&resolved.at);

        match self.marker.stamp(&content, &date) {
            Some(updated) => {
                if !self.dry_run {
                    if let Err(e) = self.fs.write_atomic(&path, &updated) {
                        return PageReport {
                            file: name.to_string(),
                            outcome: UpdateOutcome::Failed {
                                message: e.to_string(),
                            },
                            date_fallback,
                        };
                    }
                }
                PageReport {
                    file: name.to_string(),
                    outcome: UpdateOutcome::Updated { date },
                    date_fallback,
                }
            }
            None => PageReport {
                file: name.to_string(),
                outcome: UpdateOutcome::MarkerMissing,
                date_fallback,
            },
        }
    }
}
