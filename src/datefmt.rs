//! Date rendering for the stamp text.

use chrono::{DateTime, Datelike, FixedOffset};

/// Full English month names, indexed by zero-based calendar month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Render a timestamp as `"<MonthName> <Day>, <Year>"`.
///
/// The day carries no leading zero and the timestamp is read in its own
/// recorded offset, so a commit made late in the evening keeps the
/// calendar day its author saw.
pub fn format_date(at: &DateTime<FixedOffset>) -> String {
    let month = MONTH_NAMES[at.month0() as usize];
    format!("{} {}, {}", month, at.day(), at.year())
}
