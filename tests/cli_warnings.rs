//! Warning and skip behavior: missing pages, absent markers, failing
//! git queries. None of these may change the exit status.

mod common;

use common::{today, TestSite};

#[test]
fn missing_page_warns_and_skips() {
    let site = TestSite::new();
    site.git_init();

    let result = site.run(&["cv.html"]);

    assert!(result.success);
    assert!(result.stderr.contains("File not found: cv.html"));
    assert!(!result.stdout.contains("Updated"));
    assert!(result.stdout.contains("Done!"));
}

#[test]
fn page_without_marker_warns_and_stays_untouched() {
    let site = TestSite::new();
    site.git_init();
    site.write_page("about.html", "<html><body>plain page</body></html>\n");
    site.git_add_all();
    site.git_commit("2024-03-05 12:00:00 +0000");

    let result = site.run(&["about.html"]);

    assert!(result.success);
    assert!(result.stderr.contains("Could not find last-updated in about.html"));
    assert_eq!(
        site.read_page("about.html"),
        "<html><body>plain page</body></html>\n"
    );
}

#[test]
fn no_repository_warns_and_stamps_today() {
    let site = TestSite::new();
    site.write_marker_page("index.html");
    let (key, value) = site.ceiling_env();

    let before = today();
    let result = site.run_with_env(&["index.html"], &[(key.as_str(), value.as_str())]);
    let after = today();

    assert!(result.success);
    assert!(result.stderr.contains(
        "Warning: Could not get git date for index.html, using current date"
    ));
    let stamped = result.stdout.contains(&format!("Updated index.html: {}", before))
        || result.stdout.contains(&format!("Updated index.html: {}", after));
    assert!(stamped, "expected today's date in: {}", result.stdout);
}

#[test]
fn no_repository_and_no_marker_emits_both_warnings() {
    let site = TestSite::new();
    site.write_page("plain.html", "<html>no marker</html>\n");
    let (key, value) = site.ceiling_env();

    let result = site.run_with_env(&["plain.html"], &[(key.as_str(), value.as_str())]);

    assert!(result.success);
    assert!(result.stderr.contains(
        "Warning: Could not get git date for plain.html, using current date"
    ));
    assert!(result.stderr.contains("Could not find last-updated in plain.html"));
    assert_eq!(site.read_page("plain.html"), "<html>no marker</html>\n");
}

#[test]
fn run_completes_when_every_page_is_missing() {
    let site = TestSite::new();
    site.git_init();

    let result = site.run(&[]);

    assert!(result.success);
    assert_eq!(result.stderr.matches("File not found: ").count(), 9);
    assert!(result.stdout.contains("Done!"));
}
