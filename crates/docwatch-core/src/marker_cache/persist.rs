//! Persist markers to disk (JSON under XDG state dir) so checks survive across runs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::MarkerStore;

const FORMAT_VERSION: u32 = 1;

/// On-disk marker store: `{"version": 1, "markers": {"<url>": "<etag>"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerFile {
    #[serde(default = "format_version")]
    pub version: u32,
    #[serde(default)]
    pub markers: BTreeMap<String, String>,
}

fn format_version() -> u32 {
    FORMAT_VERSION
}

impl Default for MarkerFile {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerFile {
    pub fn new() -> Self {
        Self {
            version: FORMAT_VERSION,
            markers: BTreeMap::new(),
        }
    }

    /// Default path: `~/.local/state/docwatch/markers.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("docwatch")?;
        Ok(xdg_dirs.place_state_file("markers.json")?)
    }

    /// Load from `path`. A missing file is an empty store; a corrupt one is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => return Err(e).with_context(|| format!("read markers: {}", path.display())),
        };
        let file: MarkerFile = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse markers: {}", path.display()))?;
        if file.version != FORMAT_VERSION {
            anyhow::bail!(
                "unsupported marker file version {} in {}",
                file.version,
                path.display()
            );
        }
        Ok(file)
    }

    /// Save to `path` (creates parent dir if needed).
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("serialize markers")?;
        std::fs::write(path, json).with_context(|| format!("write markers: {}", path.display()))?;
        Ok(())
    }

    /// Drop the marker for `resource_id`; returns the removed marker.
    pub fn remove(&mut self, resource_id: &str) -> Option<String> {
        self.markers.remove(resource_id)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.markers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl MarkerStore for MarkerFile {
    fn get(&self, resource_id: &str) -> Option<String> {
        self.markers.get(resource_id).cloned()
    }

    fn set(&mut self, resource_id: &str, marker: String) {
        self.markers.insert(resource_id.to_string(), marker);
    }
}
