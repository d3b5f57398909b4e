//! Retry loop: run a closure until success or the policy says stop.

use super::classify;
use super::policy::{RetryDecision, RetryPolicy};
use crate::error::FetchError;

/// Runs `f` until it succeeds or the retry policy says to stop.
///
/// On a retryable failure, sleeps for the backoff duration then tries again.
/// A 5xx that is still failing once the budget is spent is reported as
/// `FetchError::RetryExhausted`; any other error is returned as-is.
pub fn run_with_retry<T, F>(policy: &RetryPolicy, url: &str, mut f: F) -> Result<T, FetchError>
where
    F: FnMut() -> Result<T, FetchError>,
{
    let mut attempt = 1u32;
    loop {
        match f() {
            Ok(v) => return Ok(v),
            Err(e) => {
                let kind = classify::classify(&e);
                match policy.decide(attempt, kind) {
                    RetryDecision::NoRetry => return Err(exhausted(e, attempt)),
                    RetryDecision::RetryAfter(d) => {
                        tracing::warn!(
                            "{} failed on attempt {} ({}), retrying in {:?}",
                            url,
                            attempt,
                            e,
                            d
                        );
                        std::thread::sleep(d);
                        attempt += 1;
                    }
                }
            }
        }
    }
}

fn exhausted(e: FetchError, attempts: u32) -> FetchError {
    match e {
        FetchError::Status { url, status } if (500..600).contains(&status) => {
            FetchError::RetryExhausted {
                url,
                attempts,
                status,
            }
        }
        other => other,
    }
}
