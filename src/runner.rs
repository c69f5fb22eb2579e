//! Run driver
//!
//! Walks the configured page list in order, feeding each page through
//! the updater and emitting progress events through a callback. Page
//! outcomes never abort the run; the process-level exit status does not
//! depend on how many pages were skipped or warned about.

use std::path::Path;

use chrono::Local;

use crate::config::Config;
use crate::fs::FileSystem;
use crate::git::VersionControl;
use crate::update::{UpdateOutcome, Updater};

/// Options for a run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Resolve and report without writing
    pub dry_run: bool,
}

/// Progress event emitted while stamping pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    Started { total: usize },
    /// The git query errored for this page; "now" was substituted.
    /// Emitted in addition to the page's outcome event.
    GitFallback { file: String },
    Updated { file: String, date: String },
    MarkerMissing { file: String },
    FileMissing { file: String },
    Failed { file: String, message: String },
    Finished { updated: usize, skipped: usize },
}

/// Tally of a run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Pages rewritten (or that would be, under dry-run)
    pub updated: Vec<String>,
    /// Pages skipped (absent, or present without a marker)
    pub skipped: Vec<String>,
    /// Read/write failures
    pub errors: Vec<String>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.errors.is_empty()
    }
}

/// Stamp every configured page, in order.
///
/// "Now" is captured once at run start, so every fallback within one
/// run stamps the same date.
pub fn run(
    config: &Config,
    base: &Path,
    fs: &dyn FileSystem,
    vcs: &dyn VersionControl,
    options: &RunOptions,
    mut on_event: impl FnMut(RunEvent),
) -> RunReport {
    let mut report = RunReport::new();
    let now = Local::now().fixed_offset();
    let updater = Updater::new(fs, vcs, base.to_path_buf(), options.dry_run);

    on_event(RunEvent::Started {
        total: config.pages.len(),
    });

    for name in &config.pages {
        let page = updater.update_page(name, now);

        if page.date_fallback {
            on_event(RunEvent::GitFallback {
                file: page.file.clone(),
            });
        }

        match page.outcome {
            UpdateOutcome::Updated { date } => {
                report.updated.push(page.file.clone());
                on_event(RunEvent::Updated {
                    file: page.file,
                    date,
                });
            }
            UpdateOutcome::MarkerMissing => {
                report.skipped.push(page.file.clone());
                on_event(RunEvent::MarkerMissing { file: page.file });
            }
            UpdateOutcome::FileMissing => {
                report.skipped.push(page.file.clone());
                on_event(RunEvent::FileMissing { file: page.file });
            }
            UpdateOutcome::Failed { message } => {
                report.errors.push(format!("{}: {}", page.file, message));
                on_event(RunEvent::Failed {
                    file: page.file,
                    message,
                });
            }
        }
    }

    on_event(RunEvent::Finished {
        updated: report.updated.len(),
        skipped: report.skipped.len(),
    });

    report
}
