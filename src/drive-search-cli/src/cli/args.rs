//! Command-line argument structures.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use drive_search::DEFAULT_MAX_RESULTS;

/// Log level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Search your synced Google Drive files from a launcher.
#[derive(Debug, Parser)]
#[command(name = "fuzzy-drive-search")]
#[command(version, about = "Search synced Google Drive files", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Read the snapshot from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log verbosity level (error, warn, info, debug, trace)
    #[arg(long = "log-level", short = 'L', value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search files by name and keywords
    #[command(visible_alias = "s")]
    Search(SearchArgs),

    /// Show information about the cached snapshot
    #[command(visible_alias = "info")]
    Status(StatusArgs),

    /// List known folders
    Folders(FoldersArgs),
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Query words; every word must match
    #[arg(required = true, value_name = "QUERY")]
    pub query: Vec<String>,

    /// Maximum number of results (0 uses the default)
    #[arg(long, short = 'n', default_value_t = DEFAULT_MAX_RESULTS)]
    pub limit: usize,

    /// Reload the snapshot before searching
    #[arg(long)]
    pub refresh: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl SearchArgs {
    /// The query words joined by single spaces.
    pub fn query_string(&self) -> String {
        self.query.join(" ")
    }
}

/// Arguments for the status command.
#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the folders command.
#[derive(Debug, Parser)]
pub struct FoldersArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
