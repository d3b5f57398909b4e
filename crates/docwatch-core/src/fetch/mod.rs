//! HTTP session: full-document GET and marker probes, with 5xx retry.
//!
//! The traits here are the seams the change-detection cache and the
//! document loaders depend on; `HttpSession` is the curl-backed implementation.

mod get;

use crate::error::FetchError;
use crate::fetch_head;
use crate::retry::{run_with_retry, RetryPolicy};
use std::time::Duration;

/// Retrieves the full content of a remote document.
pub trait DocumentFetcher {
    fn fetch_full_document(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Lightweight metadata-only probe returning the value of a named header.
pub trait MarkerProber {
    /// Returns `Ok(None)` when the resource does not send `header`.
    fn probe_marker(&self, url: &str, header: &str) -> Result<Option<String>, FetchError>;
}

impl<T: DocumentFetcher + ?Sized> DocumentFetcher for &T {
    fn fetch_full_document(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch_full_document(url)
    }
}

impl<T: MarkerProber + ?Sized> MarkerProber for &T {
    fn probe_marker(&self, url: &str, header: &str) -> Result<Option<String>, FetchError> {
        (**self).probe_marker(url, header)
    }
}

/// Transport timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    /// Whole-request limit for HEAD probes.
    pub head: Duration,
    /// Whole-request limit for full GETs.
    pub get: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(15),
            head: Duration::from_secs(30),
            get: Duration::from_secs(300),
        }
    }
}

/// Blocking HTTP session that retries 5xx responses per its `RetryPolicy`.
#[derive(Debug, Clone, Default)]
pub struct HttpSession {
    policy: RetryPolicy,
    timeouts: Timeouts,
    headers: Vec<(String, String)>,
}

impl HttpSession {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Adds a header sent with every request (e.g. `User-Agent`).
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// HEAD the URL and return all response metadata.
    pub fn head(&self, url: &str) -> Result<fetch_head::HeadResult, FetchError> {
        validate_url(url)?;
        run_with_retry(&self.policy, url, || {
            fetch_head::probe(url, &self.headers, self.timeouts.connect, self.timeouts.head)
        })
    }
}

impl DocumentFetcher for HttpSession {
    fn fetch_full_document(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        validate_url(url)?;
        let body = run_with_retry(&self.policy, url, || {
            get::get_body(url, &self.headers, self.timeouts.connect, self.timeouts.get)
        })?;
        tracing::debug!("GET {} -> {} bytes", url, body.len());
        Ok(body)
    }
}

impl MarkerProber for HttpSession {
    fn probe_marker(&self, url: &str, header: &str) -> Result<Option<String>, FetchError> {
        let head = self.head(url)?;
        Ok(head.header(header).map(str::to_string))
    }
}

/// Rejects identifiers that are empty or not absolute http(s) URLs.
pub(crate) fn validate_url(url: &str) -> Result<(), FetchError> {
    let parsed = url::Url::parse(url).map_err(|_| FetchError::InvalidResource(url.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(FetchError::InvalidResource(url.to_string())),
    }
}
