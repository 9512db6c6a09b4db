#![cfg(not(target_arch = "wasm32"))]

use std::fs;

use blogfx::post::check_post;
use blogfx::Error;

fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn valid_post_builds_preview() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "2025-11-02-rust-in-the-browser.md",
        "---\nlayout: single\ntitle: 'Rust in the Browser'\ndate: 2025-11-02 10:00:00 +0000\ncategories:\n  - Rust\n---\n\nHello.\n",
    );

    let report = check_post(&path).unwrap();
    assert_eq!(report.front.title, "Rust in the Browser");
    assert!(report.front.has_categories);
    assert_eq!(report.front.teaser, None);

    let preview = report.preview();
    assert!(preview.contains("PREVIEW: Rust in the Browser"));
    assert!(preview.contains("(Year: 2025, Month: 11)"));
    assert!(preview.contains("Permalink:    /2025/11/Rust In The Browser/"));
    assert!(preview.contains("Header Image: None"));
}

#[test]
fn filename_is_checked_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.md");
    assert!(matches!(check_post(&path), Err(Error::BadFilename(n)) if n == "notes.md"));
}

#[test]
fn unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("2025-01-01-missing.md");
    assert!(matches!(check_post(&path), Err(Error::Read { .. })));
}

#[test]
fn missing_date_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "2025-01-01-draft.md", "---\ntitle: Draft\n---\n");
    let err = check_post(&path).unwrap_err();
    assert_eq!(err.to_string(), "missing required front matter fields: date");
}
