use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::{HttpSession, Timeouts};
use crate::marker_cache::{MarkerFile, DEFAULT_MARKER_HEADER};
use crate::retry::RetryPolicy;

/// Retry policy parameters (optional `[retry]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries after the first attempt, for 5xx responses only.
    pub max_retries: u32,
    /// Exponential backoff factor in seconds (0.5 = 0.5s, 1s, 2s, ...).
    pub backoff_factor: f64,
    /// Maximum backoff delay in seconds.
    pub max_backoff_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            backoff_factor: 0.5,
            max_backoff_secs: 120,
        }
    }
}

impl RetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            backoff_factor: self.backoff_factor,
            max_backoff: Duration::from_secs(self.max_backoff_secs),
        }
    }
}

/// Transport timeouts in seconds (optional `[timeouts]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub connect_secs: u64,
    pub head_secs: u64,
    pub get_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 15,
            head_secs: 30,
            get_secs: 300,
        }
    }
}

impl TimeoutConfig {
    pub fn to_timeouts(&self) -> Timeouts {
        Timeouts {
            connect: Duration::from_secs(self.connect_secs),
            head: Duration::from_secs(self.head_secs),
            get: Duration::from_secs(self.get_secs),
        }
    }
}

/// Global configuration loaded from `~/.config/docwatch/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocwatchConfig {
    /// Response header holding the change marker.
    pub marker_header: String,
    /// Marker store file; defaults to `~/.local/state/docwatch/markers.json`.
    pub store_path: Option<PathBuf>,
    /// `User-Agent` sent with every request.
    pub user_agent: Option<String>,
    /// Optional retry policy; if missing, built-in defaults are used.
    pub retry: Option<RetryConfig>,
    /// Optional timeouts; if missing, built-in defaults are used.
    pub timeouts: Option<TimeoutConfig>,
}

impl Default for DocwatchConfig {
    fn default() -> Self {
        Self {
            marker_header: DEFAULT_MARKER_HEADER.to_string(),
            store_path: None,
            user_agent: Some(concat!("docwatch/", env!("CARGO_PKG_VERSION")).to_string()),
            retry: None,
            timeouts: None,
        }
    }
}

impl DocwatchConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry.clone().unwrap_or_default().to_policy()
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts.clone().unwrap_or_default().to_timeouts()
    }

    /// HTTP session built from the retry, timeout and user-agent settings.
    pub fn http_session(&self) -> HttpSession {
        let session = HttpSession::new(self.retry_policy()).with_timeouts(self.timeouts());
        match &self.user_agent {
            Some(ua) => session.with_header("User-Agent", ua.clone()),
            None => session,
        }
    }

    /// Configured store path, or the XDG default.
    pub fn marker_store_path(&self) -> Result<PathBuf> {
        match &self.store_path {
            Some(p) => Ok(p.clone()),
            None => MarkerFile::default_path(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("docwatch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DocwatchConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<DocwatchConfig> {
    if !path.exists() {
        let default_cfg = DocwatchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: DocwatchConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
