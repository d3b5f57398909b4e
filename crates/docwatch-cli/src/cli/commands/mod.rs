//! CLI command handlers, one per file.

mod check;
mod fetch;
mod forget;
mod is_cve;
mod load;
mod markers;

pub use check::run_check;
pub use fetch::run_fetch;
pub use forget::run_forget;
pub use is_cve::run_is_cve;
pub use load::run_load;
pub use markers::run_markers;

use anyhow::Result;
use docwatch_core::config::DocwatchConfig;
use std::path::{Path, PathBuf};

/// `--store` wins over the configured path, which wins over the XDG default.
fn store_path(cfg: &DocwatchConfig, store: Option<&Path>) -> Result<PathBuf> {
    match store {
        Some(p) => Ok(p.to_path_buf()),
        None => cfg.marker_store_path(),
    }
}
