//! Integration test: HttpSession retries 5xx responses and nothing else.

mod common;

use common::marker_server::{self, ServerState};
use docwatch_core::retry::RetryPolicy;
use docwatch_core::{DocumentFetcher, FetchError, HttpSession, MarkerProber};
use std::sync::Arc;
use std::time::Duration;

fn fast_policy(max_retries: u32) -> RetryPolicy {
    RetryPolicy {
        max_retries,
        backoff_factor: 0.01,
        max_backoff: Duration::from_millis(50),
    }
}

#[test]
fn get_succeeds_after_transient_503s() {
    let state = Arc::new(ServerState::new(None, b"name: feed\n"));
    state.fail_next(2);
    let url = marker_server::start(Arc::clone(&state), "feed.yml");

    let body = HttpSession::new(fast_policy(3))
        .fetch_full_document(&url)
        .unwrap();
    assert_eq!(body, b"name: feed\n");
    assert_eq!(state.gets(), 3);
}

#[test]
fn get_gives_up_after_retry_budget() {
    let mut state = ServerState::new(None, b"x");
    state.fail_status = 500;
    let state = Arc::new(state);
    state.fail_next(100);
    let url = marker_server::start(Arc::clone(&state), "feed.yml");

    let err = HttpSession::new(fast_policy(2))
        .fetch_full_document(&url)
        .unwrap_err();
    match err {
        FetchError::RetryExhausted {
            attempts, status, ..
        } => {
            assert_eq!(attempts, 3);
            assert_eq!(status, 500);
        }
        other => panic!("expected RetryExhausted, got {other:?}"),
    }
    assert_eq!(state.gets(), 3);
}

#[test]
fn client_error_is_not_retried() {
    let mut state = ServerState::new(None, b"");
    state.status = 404;
    let state = Arc::new(state);
    let url = marker_server::start(Arc::clone(&state), "missing.json");

    let err = HttpSession::new(fast_policy(5))
        .fetch_full_document(&url)
        .unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 404, .. }));
    assert_eq!(state.gets(), 1);
}

#[test]
fn probe_retries_5xx_too() {
    let state = Arc::new(ServerState::new(Some("e-42"), b""));
    state.fail_next(1);
    let url = marker_server::start(Arc::clone(&state), "feed.yml");

    let marker = HttpSession::new(fast_policy(2))
        .probe_marker(&url, "ETag")
        .unwrap();
    assert_eq!(marker.as_deref(), Some("e-42"));
    assert_eq!(state.heads(), 2);
    assert_eq!(state.gets(), 0);
}
