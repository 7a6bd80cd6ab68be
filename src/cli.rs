use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Browse the version history of a binary package repository
#[derive(Parser, Debug)]
#[command(name = "pkg-history")]
#[command(version)]
#[command(about = "Browse the version history of a binary package repository", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Page rendered from both documents / merge written
    1  Page rendered, but a document failed to load
    2  Invalid command-line arguments
    3  Error occurred")]
pub struct Cli {
    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the version matrix and the selected package's details
    Browse(BrowseArgs),

    /// Integrate a build's packagesite dump into the history file
    Merge(MergeArgs),
}

/// Arguments for the `browse` subcommand
#[derive(Parser, Debug)]
pub struct BrowseArgs {
    /// Output format: html, markdown or json [default: html]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Package to show in the detail panel instead of the first row
    #[arg(short, long, value_name = "NAME")]
    pub package: Option<String>,

    /// Only show rows with a cell containing TERM (case-insensitive)
    #[arg(long, value_name = "TERM")]
    pub search: Option<String>,

    /// Read documents from the local directory instead of the repository
    #[arg(long)]
    pub dev: bool,

    /// Page address; development mode is used when it equals the dev URL
    #[arg(long, value_name = "URL")]
    pub page_url: Option<String>,

    /// Directory holding the documents in development mode
    #[arg(long, value_name = "DIR")]
    pub local_dir: Option<PathBuf>,

    /// Base URL the documents are fetched from
    #[arg(long, value_name = "URL")]
    pub remote_base_url: Option<String>,

    /// Expand every dependency subtree
    #[arg(long)]
    pub expand_all: bool,

    /// Path to configuration file (default: auto-discover pkg-history.config.yml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `merge` subcommand
#[derive(Parser, Debug)]
pub struct MergeArgs {
    /// Packagesite dump (one JSON object per package)
    #[arg(long, value_name = "FILE", default_value = "packagesite.yaml")]
    pub packagesite: PathBuf,

    /// Build history file, updated in place
    #[arg(long, value_name = "FILE", default_value = "packagehistory.json")]
    pub history: PathBuf,

    /// Build id (digits only)
    #[arg(long, value_name = "ID")]
    pub build: String,

    /// Release date of the build (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub release_date: String,

    /// FreeBSD version the build targets
    #[arg(long, value_name = "VERSION")]
    pub freebsd_version: Option<String>,

    /// Package count published with the build
    #[arg(long, value_name = "N")]
    pub packages_count: Option<String>,

    /// Also export the parsed dump as the browser's catalog (e.g. packagesite.json)
    #[arg(long, value_name = "FILE")]
    pub catalog_out: Option<PathBuf>,

    /// README whose builds table gets a row for a newly added build
    #[arg(long, value_name = "FILE")]
    pub readme: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
