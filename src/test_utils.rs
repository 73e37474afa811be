//! Test utilities: an in-memory transport and listing page builders.
//!
//! This module is only compiled for tests and benchmarks.

use std::cell::RefCell;
use std::collections::HashMap;

use url::Url;

use crate::fetch::{FetchError, Fetcher, FileHeaders};

enum Canned {
    Page(String),
    File(FileHeaders),
    Status(u16),
}

/// A [`Fetcher`] that serves canned responses keyed by URL.
///
/// Any URL without a canned response fails with a connection error.
/// Every request is recorded so tests can assert on what was fetched.
#[derive(Default)]
pub struct FakeFetcher {
    responses: HashMap<String, Canned>,
    requests: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` as the page at `url`.
    pub fn with_page(mut self, url: &str, body: impl Into<String>) -> Self {
        self.responses
            .insert(url.to_string(), Canned::Page(body.into()));
        self
    }

    /// Serve file headers at `url`.
    pub fn with_file(
        mut self,
        url: &str,
        content_length: Option<u64>,
        last_modified: Option<&str>,
    ) -> Self {
        self.responses.insert(
            url.to_string(),
            Canned::File(FileHeaders {
                content_length,
                last_modified: last_modified.map(str::to_string),
            }),
        );
        self
    }

    /// Answer `url` with a non-success HTTP status.
    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses
            .insert(url.to_string(), Canned::Status(status));
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    fn lookup(&self, url: &Url) -> Result<&Canned, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        match self.responses.get(url.as_str()) {
            Some(Canned::Status(status)) => Err(FetchError::Status {
                url: url.clone(),
                status: *status,
            }),
            Some(canned) => Ok(canned),
            None => Err(FetchError::Connection {
                url: url.clone(),
                message: "connection refused".to_string(),
            }),
        }
    }
}

impl Fetcher for FakeFetcher {
    fn fetch_page(&self, url: &Url) -> Result<String, FetchError> {
        match self.lookup(url)? {
            Canned::Page(body) => Ok(body.clone()),
            Canned::File(_) => Ok(String::new()),
            Canned::Status(_) => unreachable!("status responses are returned as errors"),
        }
    }

    fn fetch_headers(&self, url: &Url) -> Result<FileHeaders, FetchError> {
        match self.lookup(url)? {
            Canned::File(headers) => Ok(headers.clone()),
            Canned::Page(body) => Ok(FileHeaders {
                content_length: Some(body.len() as u64),
                last_modified: None,
            }),
            Canned::Status(_) => unreachable!("status responses are returned as errors"),
        }
    }
}

/// One data row of a generated listing page.
pub struct Row<'a> {
    pub name: &'a str,
    pub href: &'a str,
    pub modified: &'a str,
}

impl<'a> Row<'a> {
    pub fn new(name: &'a str, href: &'a str, modified: &'a str) -> Self {
        Self {
            name,
            href,
            modified,
        }
    }
}

/// Build an Apache `mod_autoindex` style page: two header rows, a parent
/// directory row, the given rows, and a closing rule row.
pub fn listing_page(path: &str, rows: &[Row<'_>]) -> String {
    let mut html = format!(
        "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 3.2 Final//EN\">\n\
         <html>\n<head>\n<title>Index of {path}</title>\n</head>\n<body>\n\
         <h1>Index of {path}</h1>\n<table>\n\
         <tr><th valign=\"top\"><img src=\"/icons/blank.gif\" alt=\"[ICO]\"></th>\
         <th><a href=\"?C=N;O=D\">Name</a></th><th><a href=\"?C=M;O=A\">Last modified</a></th>\
         <th><a href=\"?C=S;O=A\">Size</a></th><th><a href=\"?C=D;O=A\">Description</a></th></tr>\n\
         <tr><th colspan=\"5\"><hr></th></tr>\n\
         <tr><td valign=\"top\"><img src=\"/icons/back.gif\" alt=\"[PARENTDIR]\"></td>\
         <td><a href=\"../\">Parent Directory</a></td><td>&nbsp;</td>\
         <td align=\"right\">  - </td><td>&nbsp;</td></tr>\n"
    );
    for row in rows {
        html.push_str(&format!(
            "<tr><td valign=\"top\"><img src=\"/icons/unknown.gif\" alt=\"[   ]\"></td>\
             <td><a href=\"{}\">{}</a></td><td align=\"right\">{}  </td>\
             <td align=\"right\">  - </td><td>&nbsp;</td></tr>\n",
            row.href, row.name, row.modified
        ));
    }
    html.push_str("<tr><th colspan=\"5\"><hr></th></tr>\n</table>\n</body></html>\n");
    html
}
