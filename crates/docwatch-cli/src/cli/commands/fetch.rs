//! `docwatch fetch <url>` – download and decode a document.

use anyhow::{Context, Result};
use docwatch_core::config::DocwatchConfig;
use docwatch_core::decode::{fetch_document, Format};

pub fn run_fetch(cfg: &DocwatchConfig, url: &str, format: Option<Format>) -> Result<()> {
    let format = format
        .or_else(|| Format::from_url(url))
        .with_context(|| format!("cannot infer format of {url}; pass --format"))?;
    let session = cfg.http_session();
    let doc = fetch_document(&session, url, format).with_context(|| format!("fetch {url}"))?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
