//! `docwatch forget <url>` – drop a recorded marker.

use anyhow::Result;
use docwatch_core::config::DocwatchConfig;
use docwatch_core::MarkerFile;
use std::path::Path;

use super::store_path;

pub fn run_forget(cfg: &DocwatchConfig, url: &str, store: Option<&Path>) -> Result<()> {
    let path = store_path(cfg, store)?;
    let mut markers = MarkerFile::load_from_path(&path)?;
    match markers.remove(url) {
        Some(old) => {
            markers.save_to_path(&path)?;
            println!("Forgot marker {old} for {url}");
        }
        None => println!("No marker recorded for {url}"),
    }
    Ok(())
}
