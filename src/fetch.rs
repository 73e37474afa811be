//! HTTP transport used by the crawler
//!
//! The crawler only ever needs two things from the network: the body of a
//! listing page, and the headers of a file response. Both go through the
//! [`Fetcher`] trait so the traversal can be driven by something other than
//! a real HTTP client.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{CONTENT_LENGTH, LAST_MODIFIED};
use thiserror::Error;
use tracing::debug;
use url::Url;

const DEFAULT_USER_AGENT: &str = concat!("indexwalk/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("connection to {url} failed: {message}")]
    Connection { url: Url, message: String },

    #[error("request to {url} failed: {source}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: Url, status: u16 },
}

/// Raw header values of interest for a file response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileHeaders {
    /// `Content-Length`, if present and numeric
    pub content_length: Option<u64>,
    /// `Last-Modified`, verbatim
    pub last_modified: Option<String>,
}

/// Transport capability the crawler depends on.
pub trait Fetcher {
    /// Fetch a page and return its body as text.
    fn fetch_page(&self, url: &Url) -> Result<String, FetchError>;

    /// Fetch only the response headers for a file; the body is never read.
    fn fetch_headers(&self, url: &Url) -> Result<FileHeaders, FetchError>;
}

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Skip TLS certificate verification. Listing hosts often serve
    /// self-signed or mismatched certificates.
    pub accept_invalid_certs: bool,
    /// Per-request timeout; `None` keeps the client default
    pub timeout: Option<Duration>,
    /// Extra attempts after a connection error or timeout
    pub retries: u32,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            accept_invalid_certs: true,
            timeout: None,
            retries: 0,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// [`Fetcher`] backed by a blocking `reqwest` client.
pub struct HttpFetcher {
    client: Client,
    retries: u32,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self {
            client,
            retries: config.retries,
        })
    }

    /// Send a GET and return the response once headers arrive.
    /// Non-2xx statuses are turned into errors.
    fn get(&self, url: &Url) -> Result<Response, FetchError> {
        let mut attempt = 0;
        loop {
            match self.client.get(url.clone()).send() {
                Ok(response) => return check_status(url, response),
                Err(e) if (e.is_connect() || e.is_timeout()) && attempt < self.retries => {
                    attempt += 1;
                    debug!(%url, attempt, error = %e, "retrying request");
                }
                Err(e) => return Err(request_error(url, e)),
            }
        }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_page(&self, url: &Url) -> Result<String, FetchError> {
        debug!(%url, "fetching listing page");
        self.get(url)?.text().map_err(|e| request_error(url, e))
    }

    fn fetch_headers(&self, url: &Url) -> Result<FileHeaders, FetchError> {
        debug!(%url, "fetching file headers");
        let response = self.get(url)?;
        let headers = response.headers();
        let content_length = headers
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok());
        let last_modified = headers
            .get(LAST_MODIFIED)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        // Dropping the response closes the connection without reading the body.
        Ok(FileHeaders {
            content_length,
            last_modified,
        })
    }
}

fn check_status(url: &Url, response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::Status {
            url: url.clone(),
            status: status.as_u16(),
        })
    }
}

fn request_error(url: &Url, source: reqwest::Error) -> FetchError {
    if source.is_connect() {
        FetchError::Connection {
            url: url.clone(),
            message: source.to_string(),
        }
    } else {
        FetchError::Request {
            url: url.clone(),
            source,
        }
    }
}
