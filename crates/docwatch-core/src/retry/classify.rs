//! Classify fetch errors into retry policy error kinds.

use crate::error::FetchError;
use crate::retry::policy::ErrorKind;

/// Classify an HTTP status code for retry decisions.
pub fn classify_http_status(code: u32) -> ErrorKind {
    match code {
        500..=599 => ErrorKind::Http5xx(code as u16),
        _ => ErrorKind::Other,
    }
}

/// Classify a fetch error. Only 5xx responses are retryable; curl faults
/// propagate on the first occurrence.
pub fn classify(e: &FetchError) -> ErrorKind {
    match e {
        FetchError::Status { status, .. } => classify_http_status(*status),
        FetchError::Transport(_)
        | FetchError::RetryExhausted { .. }
        | FetchError::InvalidResource(_) => ErrorKind::Other,
    }
}
