//! `docwatch markers` – list recorded markers.

use anyhow::Result;
use docwatch_core::config::DocwatchConfig;
use docwatch_core::MarkerFile;
use std::path::Path;

use super::store_path;

pub fn run_markers(cfg: &DocwatchConfig, store: Option<&Path>) -> Result<()> {
    let path = store_path(cfg, store)?;
    let markers = MarkerFile::load_from_path(&path)?;
    if markers.is_empty() {
        println!("No markers recorded in {}.", path.display());
    } else {
        println!("{:<40} {}", "MARKER", "URL");
        for (url, marker) in markers.iter() {
            println!("{:<40} {}", marker, url);
        }
    }
    Ok(())
}
