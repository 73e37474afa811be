//! indexwalk - walk "Index of" directory listings and print the remote tree

pub mod error;
pub mod fetch;
pub mod listing;
pub mod metadata;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use fetch::{FetchConfig, FetchError, Fetcher, FileHeaders, HttpFetcher};
pub use listing::{ListingEntry, extract_entries, is_directory_listing};
pub use metadata::{FileMetadata, FileSize, fetch_file_metadata};
pub use output::{ConsolePresenter, FileRecord, OutputConfig, csv_filename, write_csv};
pub use tree::{CrawlConfig, CrawlOutput, Crawler};
