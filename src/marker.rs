//! Locating and rewriting the last-updated marker element.
//!
//! The marker is the exact fragment
//! `<p class="last-updated">Last Updated: ...</p>` where the trailing
//! text runs up to the next `<`. Only the first occurrence in a page is
//! rewritten; everything outside the matched span is preserved verbatim.

use regex::{NoExpand, Regex};

const MARKER_PATTERN: &str = r#"<p class="last-updated">Last Updated: [^<]+</p>"#;

/// Compiled marker matcher.
pub struct Marker {
    re: Regex,
}

impl Marker {
    pub fn new() -> Self {
        Self {
            re: Regex::new(MARKER_PATTERN).expect("marker pattern is a valid regex"),
        }
    }

    /// Replace the first marker element with one carrying `date_text`.
    ///
    /// Returns `None` when the page has no marker, in which case the
    /// caller must not write the file back.
    pub fn stamp(&self, content: &str, date_text: &str) -> Option<String> {
        if !self.re.is_match(content) {
            return None;
        }
        let replacement = format!(
            r#"<p class="last-updated">Last Updated: {}</p>"#,
            date_text
        );
        Some(self.re.replace(content, NoExpand(&replacement)).into_owned())
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::new()
    }
}
