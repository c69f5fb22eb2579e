//! Configuration module for Pagestamp
//!
//! The page list ships as a built-in default and can be overridden by
//! an optional `pagestamp.toml` next to the pages:
//!
//!   pages = ["index.html", "about.html"]
//!
//! Call sites load it with `Config::load(&path).unwrap_or_default()`;
//! a missing or unreadable file just means the defaults apply.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StampError, StampResult};

/// Config file name, looked up in the site directory.
pub const CONFIG_FILE: &str = "pagestamp.toml";

/// The built-in page list.
pub const DEFAULT_PAGES: [&str; 9] = [
    "index.html",
    "personal.html",
    "publications.html",
    "education.html",
    "service.html",
    "experience.html",
    "honors.html",
    "cv.html",
    "talks.html",
];

/// Runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Pages to stamp, in reporting order
    #[serde(default = "default_pages")]
    pub pages: Vec<String>,
}

fn default_pages() -> Vec<String> {
    DEFAULT_PAGES.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pages: default_pages(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StampResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| StampError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
