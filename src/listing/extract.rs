//! Row extraction for `mod_autoindex` style listing tables
//!
//! The layout handled here is the fancy-indexing table Apache generates:
//! two header rows (column titles and a rule), then one row per entry with
//! an icon cell, a name cell holding the link, a last-modified cell and a
//! size cell. Rows that don't fit that shape are not data rows.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::fetch::Fetcher;
use crate::metadata::fetch_file_metadata;

use super::entry::{ListingEntry, RawEntry};

static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("ROW selector is invalid"));
static CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("CELL selector is invalid"));
static LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("LINK selector is invalid"));

/// Leading rows that never hold entries.
const HEADER_ROWS: usize = 2;
/// A data row has more cells than this.
const MIN_CELLS: usize = 3;
const PARENT_DIRECTORY: &str = "Parent Directory";

/// Parse and classify the data rows of a listing page without touching the
/// network. Entries keep table order.
pub fn parse_rows(base: &Url, doc: &Html) -> Vec<RawEntry> {
    doc.select(&ROW)
        .skip(HEADER_ROWS)
        .filter_map(|row| parse_row(base, row))
        .collect()
}

/// Extract all entries of a listing page, looking up size and date for
/// every file.
pub fn extract_entries(base: &Url, doc: &Html, fetcher: &dyn Fetcher) -> Vec<ListingEntry> {
    parse_rows(base, doc)
        .into_iter()
        .map(|raw| {
            if raw.is_directory {
                ListingEntry::directory(raw)
            } else {
                let metadata = fetch_file_metadata(fetcher, &raw.url);
                ListingEntry::file(raw, metadata)
            }
        })
        .collect()
}

fn parse_row(base: &Url, row: ElementRef<'_>) -> Option<RawEntry> {
    let cells: Vec<ElementRef<'_>> = row.select(&CELL).collect();
    if cells.len() <= MIN_CELLS {
        return None;
    }

    let name_cell = cells[1];
    let name = stripped_text(name_cell);
    if name == PARENT_DIRECTORY {
        return None;
    }

    let href = name_cell
        .select(&LINK)
        .next()
        .and_then(|a| a.value().attr("href"));
    let Some(href) = href else {
        debug!(%name, "row has no link, skipping");
        return None;
    };
    let url = match base.join(href) {
        Ok(url) => url,
        Err(e) => {
            debug!(%href, error = %e, "unresolvable href, skipping");
            return None;
        }
    };

    Some(RawEntry {
        is_directory: !is_file_url(&url),
        name,
        url,
        last_modified: stripped_text(cells[2]),
    })
}

/// A period in the last path segment marks a file; anything else is
/// treated as a directory. Directory links end in `/`, so their last
/// segment is empty.
pub fn is_file_url(url: &Url) -> bool {
    url.path()
        .rsplit('/')
        .next()
        .is_some_and(|segment| segment.contains('.'))
}

/// Visible text with each text node trimmed and empty pieces dropped.
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
