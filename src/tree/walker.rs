//! Crawler - walks listing pages depth-first and streams entries to output

use std::error::Error;
use std::io;

use scraper::Html;
use tracing::{debug, info};
use url::Url;

use crate::fetch::{FetchError, Fetcher, HttpFetcher};
use crate::listing::{ListingEntry, extract_entries, is_directory_listing, sort_entries};
use crate::output::FileRecord;

use super::config::CrawlConfig;

/// Callback for crawl output - receives entries as they are reached.
pub trait CrawlOutput {
    fn output_entry(&mut self, entry: &ListingEntry, depth: usize) -> io::Result<()>;

    /// The page at `url` was fetched but is not a directory listing.
    fn output_skipped(&mut self, url: &Url, depth: usize) -> io::Result<()>;

    /// The page at `url` could not be fetched; its subtree is dropped.
    fn output_error(&mut self, url: &str, error: &dyn Error, depth: usize) -> io::Result<()>;
}

/// Sequential, depth-first crawler over directory listing pages.
///
/// There is no cycle detection: a listing that links back to one of its
/// ancestors is followed until the stack runs out.
pub struct Crawler<F> {
    config: CrawlConfig,
    fetcher: F,
}

impl Crawler<HttpFetcher> {
    /// Crawler over real HTTP, built from `config.fetch`.
    pub fn with_http(config: CrawlConfig) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(&config.fetch)?;
        Ok(Self::new(config, fetcher))
    }
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(config: CrawlConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Walk the listing at `root` and everything below it.
    ///
    /// Returns the collected file records (empty unless `collect_csv` is
    /// set). Fetch failures only drop the affected subtree; the only errors
    /// returned are failures to write output.
    pub fn crawl<O: CrawlOutput>(&self, root: &Url, output: &mut O) -> io::Result<Vec<FileRecord>> {
        info!(%root, collect_csv = self.config.collect_csv, "starting crawl");
        let records = self.walk_listing(root, 0, output)?;
        info!(files = records.len(), "crawl finished");
        Ok(records)
    }

    fn walk_listing<O: CrawlOutput>(
        &self,
        url: &Url,
        depth: usize,
        output: &mut O,
    ) -> io::Result<Vec<FileRecord>> {
        let Some(mut entries) = self.read_listing(url, depth, output)? else {
            return Ok(Vec::new());
        };
        sort_entries(&mut entries);

        let mut records = Vec::new();
        for entry in &entries {
            output.output_entry(entry, depth)?;
            if entry.is_directory {
                records.extend(self.walk_listing(&entry.url, depth + 1, output)?);
            } else if self.config.collect_csv {
                records.extend(entry.to_record());
            }
        }
        Ok(records)
    }

    /// Fetch and parse one page. `None` means the page could not be fetched
    /// or is not a listing; the reason has already been reported.
    fn read_listing<O: CrawlOutput>(
        &self,
        url: &Url,
        depth: usize,
        output: &mut O,
    ) -> io::Result<Option<Vec<ListingEntry>>> {
        let body = match self.fetcher.fetch_page(url) {
            Ok(body) => body,
            Err(e) => {
                debug!(%url, error = %e, "listing fetch failed");
                output.output_error(url.as_str(), &e, depth)?;
                return Ok(None);
            }
        };

        let doc = Html::parse_document(&body);
        if !is_directory_listing(&doc) {
            debug!(%url, "not a directory listing");
            output.output_skipped(url, depth)?;
            return Ok(None);
        }
        Ok(Some(extract_entries(url, &doc, &self.fetcher)))
    }
}
