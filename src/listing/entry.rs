//! Entry types produced from listing rows

use url::Url;

use crate::metadata::{FileMetadata, FileSize};
use crate::output::FileRecord;

/// A listing row after href resolution and classification, before any
/// metadata lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: String,
    pub url: Url,
    pub is_directory: bool,
    /// Text of the "Last modified" column
    pub last_modified: String,
}

/// One file or subdirectory of a listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingEntry {
    pub is_directory: bool,
    pub name: String,
    pub url: Url,
    pub last_modified: String,
    pub size_bytes: Option<u64>,
    size: Option<FileSize>,
    details: String,
}

impl ListingEntry {
    /// Directory entry; its URL is normalized to end with `/`.
    pub fn directory(raw: RawEntry) -> Self {
        let details = format!("Last Modified: {}", raw.last_modified);
        Self {
            is_directory: true,
            name: raw.name,
            url: with_trailing_slash(raw.url),
            last_modified: raw.last_modified,
            size_bytes: None,
            size: None,
            details,
        }
    }

    /// File entry; size and date come from the metadata lookup rather than
    /// the listing column.
    pub fn file(raw: RawEntry, metadata: FileMetadata) -> Self {
        let details = format!(
            "Size: {} MB, Last Modified: {}",
            metadata.size, metadata.last_modified
        );
        Self {
            is_directory: false,
            name: raw.name,
            url: raw.url,
            last_modified: metadata.last_modified,
            size_bytes: metadata.size_bytes,
            size: Some(metadata.size),
            details,
        }
    }

    /// Human-readable size/date summary shown next to the name.
    pub fn details(&self) -> &str {
        &self.details
    }

    /// CSV row for a file entry; `None` for directories.
    pub fn to_record(&self) -> Option<FileRecord> {
        let size_mb = self.size?;
        Some(FileRecord {
            filename: self.name.clone(),
            url: self.url.to_string(),
            size_mb,
            last_modified: self.last_modified.clone(),
        })
    }
}

/// Directories first, then by name.
pub fn sort_entries(entries: &mut [ListingEntry]) {
    entries.sort_by(|a, b| {
        b.is_directory
            .cmp(&a.is_directory)
            .then_with(|| a.name.cmp(&b.name))
    });
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
