//! Pagestamp CLI - last-updated stamp synchronizer for static HTML pages
//!
//! Usage: pagestamp [OPTIONS] [FILES]...
//!
//! With no arguments, stamps the configured page list in the current
//! directory using each page's most recent git commit date.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use pagestamp::runner::{run, RunEvent, RunOptions};
use pagestamp::{Config, GitCli, LocalFs, CONFIG_FILE};

/// Pagestamp - sync "Last Updated" stamps with git commit dates
#[derive(Parser, Debug)]
#[command(name = "pagestamp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the pages
    #[arg(short, long, default_value = ".")]
    source: PathBuf,

    /// Resolve and report without writing
    #[arg(long)]
    dry_run: bool,

    /// Output format for CI
    #[arg(long)]
    json: bool,

    /// Override the configured page list for this run
    files: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(&cli.source.join(CONFIG_FILE)).unwrap_or_default();
    if !cli.files.is_empty() {
        config.pages = cli.files.clone();
    }

    let fs = LocalFs::new();
    let vcs = GitCli::new(&cli.source);
    let options = RunOptions {
        dry_run: cli.dry_run,
    };

    run(&config, &cli.source, &fs, &vcs, &options, |event| {
        if cli.json {
            println!("{}", event_json(&event));
        } else {
            render_event(&event);
        }
    });

    // Per-page warnings never change the exit status.
    Ok(())
}

fn render_event(event: &RunEvent) {
    match event {
        RunEvent::Started { .. } => {
            println!("Updating last-updated dates based on git commit times...\n");
        }
        RunEvent::GitFallback { file } => {
            eprintln!(
                "Warning: Could not get git date for {}, using current date",
                file
            );
        }
        RunEvent::Updated { file, date } => {
            println!("Updated {}: {}", file, date);
        }
        RunEvent::MarkerMissing { file } => {
            eprintln!("Could not find last-updated in {}", file);
        }
        RunEvent::FileMissing { file } => {
            eprintln!("File not found: {}", file);
        }
        RunEvent::Failed { file, message } => {
            eprintln!("Error updating {}: {}", file, message);
        }
        RunEvent::Finished { .. } => {
            println!("\nDone!");
        }
    }
}

fn event_json(event: &RunEvent) -> String {
    let value = match event {
        RunEvent::Started { total } => {
            serde_json::json!({"event": "start", "files": total})
        }
        RunEvent::GitFallback { file } => {
            serde_json::json!({"event": "git_fallback", "file": file})
        }
        RunEvent::Updated { file, date } => {
            serde_json::json!({"event": "updated", "file": file, "date": date})
        }
        RunEvent::MarkerMissing { file } => {
            serde_json::json!({"event": "marker_missing", "file": file})
        }
        RunEvent::FileMissing { file } => {
            serde_json::json!({"event": "file_missing", "file": file})
        }
        RunEvent::Failed { file, message } => {
            serde_json::json!({"event": "error", "file": file, "message": message})
        }
        RunEvent::Finished { updated, skipped } => {
            serde_json::json!({"event": "done", "updated": updated, "skipped": skipped})
        }
    };
    value.to_string()
}
