//! CLI for docwatch.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use docwatch_core::config;
use docwatch_core::decode::Format;
use std::path::PathBuf;

use commands::{run_check, run_fetch, run_forget, run_is_cve, run_load, run_markers};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "docwatch")]
#[command(about = "docwatch: detect changes in remote documents and load YAML/JSON/TOML", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Probe a URL and report whether it changed since the last check.
    Check {
        /// Direct HTTP/HTTPS URL to check.
        url: String,
        /// Response header carrying the marker (default from config, usually ETag).
        #[arg(long, value_name = "NAME")]
        header: Option<String>,
        /// Marker store file (default from config or XDG state dir).
        #[arg(long, value_name = "PATH")]
        store: Option<PathBuf>,
    },

    /// Download a document and print it as JSON.
    Fetch {
        /// Direct HTTP/HTTPS URL of the document.
        url: String,
        /// Document format; inferred from the URL extension when omitted.
        #[arg(long, value_name = "FORMAT")]
        format: Option<Format>,
    },

    /// Decode a local YAML/JSON/TOML file and print it as JSON.
    Load {
        /// Path to the file.
        path: PathBuf,
        /// Document format; inferred from the extension when omitted.
        #[arg(long, value_name = "FORMAT")]
        format: Option<Format>,
    },

    /// List recorded markers.
    Markers {
        /// Marker store file (default from config or XDG state dir).
        #[arg(long, value_name = "PATH")]
        store: Option<PathBuf>,
    },

    /// Remove the recorded marker for a URL so the next check processes it.
    Forget {
        /// URL whose marker should be dropped.
        url: String,
        /// Marker store file (default from config or XDG state dir).
        #[arg(long, value_name = "PATH")]
        store: Option<PathBuf>,
    },

    /// Tell whether a string starts with a CVE identifier.
    IsCve {
        /// Candidate identifier, e.g. CVE-2021-3449.
        id: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // No config or network needed.
        if let CliCommand::IsCve { id } = &cli.command {
            return run_is_cve(id);
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check { url, header, store } => {
                run_check(&cfg, &url, header.as_deref(), store.as_deref())?
            }
            CliCommand::Fetch { url, format } => run_fetch(&cfg, &url, format)?,
            CliCommand::Load { path, format } => run_load(&path, format)?,
            CliCommand::Markers { store } => run_markers(&cfg, store.as_deref())?,
            CliCommand::Forget { url, store } => run_forget(&cfg, &url, store.as_deref())?,
            CliCommand::IsCve { id } => run_is_cve(&id)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
