//! Directory listing page parsing
//!
//! - `classify` - decides whether a page is a listing at all
//! - `extract` - turns table rows into typed entries
//! - `entry` - the entry types and their ordering

mod classify;
mod entry;
mod extract;

pub use classify::is_directory_listing;
pub use entry::{ListingEntry, RawEntry, sort_entries};
pub use extract::{extract_entries, is_file_url, parse_rows};
