//! `docwatch check <url>` – probe a URL and compare its marker with the store.

use anyhow::{Context, Result};
use docwatch_core::config::DocwatchConfig;
use docwatch_core::{ChangeDetector, Decision, MarkerFile};
use std::path::Path;

use super::store_path;

pub fn run_check(
    cfg: &DocwatchConfig,
    url: &str,
    header: Option<&str>,
    store: Option<&Path>,
) -> Result<()> {
    let path = store_path(cfg, store)?;
    let mut markers = MarkerFile::load_from_path(&path)?;
    let header = header.unwrap_or(&cfg.marker_header);
    let detector = ChangeDetector::with_header(cfg.http_session(), header);

    let decision = detector
        .check(url, &mut markers)
        .with_context(|| format!("check {url}"))?;
    if decision.records_marker() {
        markers.save_to_path(&path)?;
        tracing::info!("recorded {} marker for {} in {}", header, url, path.display());
    }

    let verdict = if decision.needs_processing() {
        "process"
    } else {
        "skip"
    };
    println!("{verdict}\t{}\t{url}", describe(decision, header));
    Ok(())
}

fn describe(decision: Decision, header: &str) -> String {
    match decision {
        Decision::MarkerUnsupported => format!("no {header} header"),
        Decision::New => "first seen".to_string(),
        Decision::Changed => format!("{header} changed"),
        Decision::Unchanged => format!("{header} unchanged"),
    }
}
