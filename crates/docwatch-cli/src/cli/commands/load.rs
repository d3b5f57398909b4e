//! `docwatch load <path>` – decode a local file.

use anyhow::{Context, Result};
use docwatch_core::decode::{self, Format};
use std::path::Path;

pub fn run_load(path: &Path, format: Option<Format>) -> Result<()> {
    let doc = match format {
        Some(f) => decode::load_as(path, f),
        None => decode::load_path(path),
    }
    .with_context(|| format!("load {}", path.display()))?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
