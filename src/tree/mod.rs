//! Remote directory tree walking
//!
//! `Crawler` fetches a listing page, prints its entries through a
//! `CrawlOutput`, and descends into each subdirectory before moving on to
//! the next sibling.

mod config;
mod walker;

pub use config::CrawlConfig;
pub use walker::{CrawlOutput, Crawler};
