//! Retry and backoff policy for HTTP requests.
//!
//! Only server-side failures (HTTP 5xx) are retried. Transport faults and
//! client errors surface immediately so the caller sees them unchanged.

mod classify;
mod policy;
mod run;

pub use classify::{classify, classify_http_status};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
