//! HTTP HEAD / metadata probing.
//!
//! Uses the curl crate (libcurl) to fetch response headers only, so a marker
//! such as `ETag` can be read without transferring the document body.

mod parse;

use crate::error::FetchError;
use std::str;
use std::time::Duration;

/// Response metadata from a HEAD request (final response after redirects).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadResult {
    /// HTTP status code of the final response.
    pub status: u32,
    /// Header `(name, value)` pairs in the order received, values trimmed.
    pub headers: Vec<(String, String)>,
}

impl HeadResult {
    /// Case-insensitive header lookup. Empty values count as absent, so the
    /// first non-empty occurrence wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, v)| k.eq_ignore_ascii_case(name) && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }

    /// `ETag` value if present.
    pub fn etag(&self) -> Option<&str> {
        self.header("etag")
    }
}

/// Performs a HEAD request and returns the parsed response headers.
///
/// Follows redirects. Custom headers are sent as `Name: value`. Runs in the
/// current thread. A non-2xx final status is returned as `FetchError::Status`.
pub fn probe(
    url: &str,
    custom_headers: &[(String, String)],
    connect_timeout: Duration,
    timeout: Duration,
) -> Result<HeadResult, FetchError> {
    let mut lines: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(connect_timeout)?;
    easy.timeout(timeout)?;

    if !custom_headers.is_empty() {
        let mut list = curl::easy::List::new();
        for (k, v) in custom_headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        easy.http_headers(list)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: code,
        });
    }

    let mut head = parse::parse_headers(&lines);
    head.status = code;
    tracing::debug!("HEAD {} -> {} ({} headers)", url, code, head.headers.len());
    Ok(head)
}
