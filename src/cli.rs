//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `lookfix`.
#[derive(Debug, Parser)]
#[command(name = "lookfix", version, about = "Localize lookup field schemas to the current web")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rewrite the named lookup fields' schemas in place.
    Localize {
        /// Internal names of the fields to localize.
        #[arg(required = true)]
        fields: Vec<String>,
        /// Path to the site map describing the current web.
        #[arg(long, default_value = "site.yaml")]
        site_map: PathBuf,
        /// Directory containing the field definition files.
        #[arg(long)]
        store: Option<PathBuf>,
        /// Report what would change without writing anything.
        #[arg(long)]
        dry_run: bool,
    },
    /// Report which fields would change, without writing.
    Check {
        /// Internal names of the fields to check; all stored fields when omitted.
        fields: Vec<String>,
        /// Path to the site map describing the current web.
        #[arg(long, default_value = "site.yaml")]
        site_map: PathBuf,
        /// Directory containing the field definition files.
        #[arg(long)]
        store: Option<PathBuf>,
        /// Emit the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List stored fields, or print one field's schema attributes.
    Show {
        /// Internal name of the field to inspect.
        field: Option<String>,
        /// Directory containing the field definition files.
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Find the list that owns a folder path.
    Resolve {
        /// Web-relative or server-relative folder path.
        path: String,
        /// Path to the site map describing the current web.
        #[arg(long, default_value = "site.yaml")]
        site_map: PathBuf,
    },
}
