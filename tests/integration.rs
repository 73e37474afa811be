//! Integration tests for indexwalk


use std::fs;

use harness::{ListingServer, Routes, Row, listing_page, run_indexwalk};
use tempfile::TempDir;

const JAN_1: &str = "Sun, 01 Jan 2023 00:00:00 GMT";

fn sample_site() -> ListingServer {
    ListingServer::start(
        Routes::new()
            .page(
                "/data/",
                listing_page(
                    "/data",
                    &[
                        Row::new("a.txt", "a.txt", "2023-01-01 00:00"),
                        Row::new("sub", "sub/", "2023-01-01 00:00"),
                    ],
                ),
            )
            .page(
                "/data/sub/",
                listing_page("/data/sub", &[Row::new("deep.iso", "deep.iso", "-")]),
            )
            .file("/data/a.txt", 2_097_152, Some(JAN_1))
            .file("/data/sub/deep.iso", 1_048_576, Some("Wed, 21 Dec 2023 10:00:00 GMT")),
    )
}

#[test]
fn test_tree_output_order_and_indent() {
    let server = sample_site();
    let dir = TempDir::new().unwrap();

    let (stdout, stderr, success) = run_indexwalk(dir.path(), &["--url", &server.url("/data/")]);
    assert!(success, "indexwalk should succeed: {}", stderr);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "sub",
            "    deep.iso  Size: 1.000 MB, Last Modified: 2023.12.21",
            "a.txt  Size: 2.000 MB, Last Modified: 2023.01.01",
        ],
        "unexpected output:\n{}",
        stdout
    );
}

#[test]
fn test_no_csv_without_flag() {
    let server = sample_site();
    let dir = TempDir::new().unwrap();

    let (stdout, _stderr, success) = run_indexwalk(dir.path(), &["--url", &server.url("/data/")]);
    assert!(success);
    assert!(!stdout.contains("CSV file created"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_csv_export() {
    let server = sample_site();
    let dir = TempDir::new().unwrap();
    let root = server.url("/data/");

    let (stdout, stderr, success) = run_indexwalk(dir.path(), &["--url", &root, "--csv"]);
    assert!(success, "indexwalk should succeed: {}", stderr);

    let filename = format!("{}_data_.csv", server.authority());
    assert!(
        stdout.contains(&format!("CSV file created: {}", filename)),
        "should announce CSV file: {}",
        stdout
    );

    let csv = fs::read_to_string(dir.path().join(&filename)).expect("CSV file should exist");
    let expected = format!(
        "Filename,URL,Size (MB),Last Modified\n\
         deep.iso,{root}sub/deep.iso,1.000,2023.12.21\n\
         a.txt,{root}a.txt,2.000,2023.01.01\n"
    );
    assert_eq!(csv, expected);
}

#[test]
fn test_non_listing_root() {
    let server = ListingServer::start(Routes::new().page(
        "/",
        "<html><head><title>Welcome</title></head><body>hi</body></html>",
    ));
    let dir = TempDir::new().unwrap();
    let root = server.url("/");

    let (stdout, _stderr, success) = run_indexwalk(dir.path(), &["--url", &root, "--csv"]);
    assert!(success);
    assert_eq!(
        stdout.trim_end(),
        format!("The page at {} is not a directory listing. Skipping.", root)
    );
    // Nothing collected, so no CSV file.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_nested_non_listing_is_indented() {
    let server = ListingServer::start(
        Routes::new()
            .page("/", listing_page("/", &[Row::new("app", "app/", "-")]))
            .page("/app/", "<html><head><title>App</title></head></html>"),
    );
    let dir = TempDir::new().unwrap();

    let (stdout, _stderr, success) = run_indexwalk(dir.path(), &["--url", &server.url("/")]);
    assert!(success);
    assert!(
        stdout.contains(&format!(
            "\n    The page at {} is not a directory listing. Skipping.",
            server.url("/app/")
        )),
        "skip notice should be indented: {}",
        stdout
    );
}
