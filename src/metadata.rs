//! Per-file metadata lookup
//!
//! Size and modification date come from the response headers of a file URL.
//! Lookups never fail: transport problems degrade to sentinel values so a
//! single unreachable file cannot interrupt the walk.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use tracing::warn;
use url::Url;

use crate::fetch::{FetchError, Fetcher, FileHeaders};

/// Placeholder used when a value could not be fetched at all.
pub const UNAVAILABLE: &str = "N/A";
/// `Last-Modified` was present but did not parse as an HTTP-date.
pub const UNKNOWN_DATE: &str = "Unknown Date";
/// The response carried no `Last-Modified` header.
pub const NOT_AVAILABLE: &str = "Not Available";

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;
const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// File size in megabytes, or the sentinel when the lookup failed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileSize {
    Megabytes(f64),
    Unavailable,
}

impl FileSize {
    pub fn from_bytes(bytes: u64) -> Self {
        FileSize::Megabytes(bytes as f64 / BYTES_PER_MEGABYTE)
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSize::Megabytes(mb) => write!(f, "{:.3}", mb),
            FileSize::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

impl Serialize for FileSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of a metadata lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetadata {
    pub size: FileSize,
    /// Raw byte count; `None` when the lookup failed
    pub size_bytes: Option<u64>,
    /// `YYYY.MM.DD`, or one of the date sentinels
    pub last_modified: String,
}

impl FileMetadata {
    /// Sentinel pair returned when the request itself failed.
    pub fn unavailable() -> Self {
        Self {
            size: FileSize::Unavailable,
            size_bytes: None,
            last_modified: UNAVAILABLE.to_string(),
        }
    }

    pub fn from_headers(headers: &FileHeaders) -> Self {
        let bytes = headers.content_length.unwrap_or(0);
        Self {
            size: FileSize::from_bytes(bytes),
            size_bytes: Some(bytes),
            last_modified: format_last_modified(headers.last_modified.as_deref()),
        }
    }
}

/// Look up size and modification date for a file URL.
pub fn fetch_file_metadata(fetcher: &dyn Fetcher, url: &Url) -> FileMetadata {
    match fetcher.fetch_headers(url) {
        Ok(headers) => FileMetadata::from_headers(&headers),
        Err(e) => {
            report_failure(url, &e);
            FileMetadata::unavailable()
        }
    }
}

fn report_failure(url: &Url, error: &FetchError) {
    warn!(%url, %error, "error fetching file info");
}

/// Reformat a `Last-Modified` header value as `YYYY.MM.DD`.
pub fn format_last_modified(header: Option<&str>) -> String {
    match header.map(str::trim).filter(|v| !v.is_empty()) {
        None => NOT_AVAILABLE.to_string(),
        Some(value) => match parse_http_date(value) {
            Some(date) => date.format("%Y.%m.%d").to_string(),
            None => UNKNOWN_DATE.to_string(),
        },
    }
}

/// Parse `Day, DD Mon YYYY HH:MM:SS GMT`.
///
/// The weekday must be a valid abbreviation but is not cross-checked
/// against the date.
fn parse_http_date(value: &str) -> Option<NaiveDateTime> {
    let (weekday, rest) = value.split_once(", ")?;
    if !WEEKDAYS.iter().any(|d| d.eq_ignore_ascii_case(weekday)) {
        return None;
    }
    let (stamp, zone) = rest.trim().rsplit_once(' ')?;
    if !(zone.eq_ignore_ascii_case("GMT") || zone.eq_ignore_ascii_case("UTC")) {
        return None;
    }
    NaiveDateTime::parse_from_str(stamp, "%d %b %Y %H:%M:%S").ok()
}
