//! Error types for probing, fetching and decoding.
//!
//! Transport-level failures are kept distinct from decode failures so callers
//! can decide which ones are worth retrying at a higher level.

use thiserror::Error;

/// Failure while probing or fetching a remote resource.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection refused, DNS, etc.).
    #[error("transport error: {0}")]
    Transport(#[from] curl::Error),

    /// Server kept answering with a 5xx status until the retry budget ran out.
    #[error("{url}: gave up after {attempts} attempts (last status HTTP {status})")]
    RetryExhausted {
        url: String,
        attempts: u32,
        status: u32,
    },

    /// Non-retryable, non-2xx HTTP status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u32 },

    /// Empty or unparsable resource identifier.
    #[error("invalid resource identifier: {0:?}")]
    InvalidResource(String),
}

impl FetchError {
    /// True for faults a caller may reasonably retry later (network trouble,
    /// exhausted server-side retries). Bad identifiers and 4xx are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Transport(_) | FetchError::RetryExhausted { .. } => true,
            FetchError::Status { status, .. } => (500..600).contains(status),
            FetchError::InvalidResource(_) => false,
        }
    }
}

/// Failure while turning bytes into a structured mapping.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML is text; raw bytes must be UTF-8 first.
    #[error("TOML: input is not UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Document parsed but its top level is a list or scalar.
    #[error("expected a mapping at the top level, found {0}")]
    NotAMapping(&'static str),

    /// No format could be inferred from the file extension.
    #[error("unknown document format: {0:?}")]
    UnknownFormat(String),

    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Fetching the document failed before decoding started.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_and_5xx_are_retryable() {
        let e = FetchError::RetryExhausted {
            url: "https://example.com/a".to_string(),
            attempts: 6,
            status: 503,
        };
        assert!(e.is_retryable());
        let e = FetchError::Status {
            url: "https://example.com/a".to_string(),
            status: 502,
        };
        assert!(e.is_retryable());
    }

    #[test]
    fn client_errors_are_not_retryable() {
        let e = FetchError::Status {
            url: "https://example.com/a".to_string(),
            status: 404,
        };
        assert!(!e.is_retryable());
        assert!(!FetchError::InvalidResource(String::new()).is_retryable());
    }

    #[test]
    fn exhausted_message_names_url_and_status() {
        let e = FetchError::RetryExhausted {
            url: "https://example.com/feed.yml".to_string(),
            attempts: 3,
            status: 500,
        };
        let msg = e.to_string();
        assert!(msg.contains("https://example.com/feed.yml"));
        assert!(msg.contains("3 attempts"));
        assert!(msg.contains("HTTP 500"));
    }
}
