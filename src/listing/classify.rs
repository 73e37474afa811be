//! Listing page detection

use std::sync::LazyLock;

use scraper::{Html, Selector};

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("TITLE selector is invalid"));

const LISTING_MARKER: &str = "Index of";

/// Whether the page is a server-generated directory listing, judged by its
/// `<title>`. Pages without a title are not listings.
pub fn is_directory_listing(doc: &Html) -> bool {
    doc.select(&TITLE)
        .next()
        .is_some_and(|title| title.text().collect::<String>().contains(LISTING_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_index_title_is_listing() {
        assert!(is_directory_listing(&page(
            "<html><head><title>Index of /pub/iso</title></head><body></body></html>"
        )));
    }

    #[test]
    fn test_other_title_is_not_listing() {
        assert!(!is_directory_listing(&page(
            "<html><head><title>Welcome to nginx!</title></head></html>"
        )));
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        assert!(!is_directory_listing(&page(
            "<html><head><title>index of /pub</title></head></html>"
        )));
    }

    #[test]
    fn test_missing_title_is_not_listing() {
        assert!(!is_directory_listing(&page(
            "<html><body><h1>Index of /pub</h1></body></html>"
        )));
    }
}
