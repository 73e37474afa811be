//! Configuration types for the crawler

use crate::fetch::FetchConfig;

/// Configuration for crawl behavior.
#[derive(Debug, Clone, Default)]
pub struct CrawlConfig {
    /// Collect a [`FileRecord`](crate::output::FileRecord) for every file
    pub collect_csv: bool,
    pub fetch: FetchConfig,
}
