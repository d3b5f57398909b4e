//! Single GET request collecting the body in memory.

use crate::error::FetchError;
use std::time::Duration;

/// One GET attempt. Follows redirects; non-2xx is `FetchError::Status`.
pub(super) fn get_body(
    url: &str,
    custom_headers: &[(String, String)],
    connect_timeout: Duration,
    timeout: Duration,
) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.accept_encoding("")?; // any encoding libcurl can decode
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
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
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
    Ok(body)
}
