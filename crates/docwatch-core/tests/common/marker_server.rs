//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a single document. HEAD answers with the current marker header (if
//! any) and no body; GET answers with the body. A configurable number of
//! leading requests fail with a 5xx status to exercise retries.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Shared, mutable server state. Tests change the marker between checks.
#[derive(Debug)]
pub struct ServerState {
    pub marker_header: String,
    pub marker: Mutex<Option<String>>,
    pub body: Mutex<Vec<u8>>,
    /// Remaining requests to fail with `fail_status`.
    pub failures_left: AtomicUsize,
    pub fail_status: u16,
    /// Status for every non-failing request (200 unless overridden).
    pub status: u16,
    pub heads: AtomicUsize,
    pub gets: AtomicUsize,
}

impl ServerState {
    pub fn new(marker: Option<&str>, body: &[u8]) -> Self {
        Self {
            marker_header: "ETag".to_string(),
            marker: Mutex::new(marker.map(String::from)),
            body: Mutex::new(body.to_vec()),
            failures_left: AtomicUsize::new(0),
            fail_status: 503,
            status: 200,
            heads: AtomicUsize::new(0),
            gets: AtomicUsize::new(0),
        }
    }

    pub fn set_marker(&self, marker: Option<&str>) {
        *self.marker.lock().unwrap() = marker.map(String::from);
    }

    pub fn fail_next(&self, n: usize) {
        self.failures_left.store(n, Ordering::SeqCst);
    }

    pub fn heads(&self) -> usize {
        self.heads.load(Ordering::SeqCst)
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. Returns the document URL
/// (e.g. "http://127.0.0.1:12345/feed.yml"). The server runs until the process exits.
pub fn start(state: Arc<ServerState>, path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let state = Arc::clone(&state);
            thread::spawn(move || handle(stream, &state));
        }
    });
    format!("http://127.0.0.1:{}/{}", port, path.trim_start_matches('/'))
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Status",
    }
}

fn handle(mut stream: TcpStream, state: &ServerState) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let method = request.split_whitespace().next().unwrap_or("");
    let is_head = method.eq_ignore_ascii_case("HEAD");
    if is_head {
        state.heads.fetch_add(1, Ordering::SeqCst);
    } else if method.eq_ignore_ascii_case("GET") {
        state.gets.fetch_add(1, Ordering::SeqCst);
    } else {
        let _ = stream.write_all(
            b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }

    let failing = state
        .failures_left
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok();
    if failing {
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            state.fail_status,
            reason(state.fail_status)
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }

    let body = state.body.lock().unwrap().clone();
    let marker = state
        .marker
        .lock()
        .unwrap()
        .as_ref()
        .map(|m| format!("{}: {}\r\n", state.marker_header, m))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        state.status,
        reason(state.status),
        body.len(),
        marker
    );
    let _ = stream.write_all(response.as_bytes());
    if !is_head {
        let _ = stream.write_all(&body);
    }
}
