//! Parse HTTP response header lines into HeadResult.

use super::HeadResult;

/// Parse collected header lines into a HeadResult.
///
/// libcurl hands us the headers of every response in a redirect chain; a
/// status line starts a new block, so only the last response's headers remain.
pub(crate) fn parse_headers(lines: &[String]) -> HeadResult {
    let mut status = 0;
    let mut headers = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            headers.clear();
            status = line
                .split_whitespace()
                .nth(1)
                .and_then(|c| c.parse::<u32>().ok())
                .unwrap_or(0);
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    HeadResult { status, headers }
}
