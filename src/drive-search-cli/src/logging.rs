//! Logging setup for the CLI.
//!
//! Logs are written to stderr so stdout carries only launcher output.

use std::io::IsTerminal;

use crate::cli::LogLevel;

/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "FUZZY_DRIVE_SEARCH_LOG";

/// Level used when nothing else is configured.
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Warn;

/// Builds the filter directive.
///
/// Precedence: `-v`, then `--log-level`, then `FUZZY_DRIVE_SEARCH_LOG`, then a
/// non-empty `RUST_LOG` taken verbatim, then [`DEFAULT_LEVEL`].
pub fn filter_directive(
    verbose: bool,
    level: Option<LogLevel>,
    env_level: Option<&str>,
    rust_log: Option<&str>,
) -> String {
    if verbose {
        return LogLevel::Debug.as_filter_str().to_string();
    }
    if let Some(level) = level {
        return level.as_filter_str().to_string();
    }
    if let Some(level) = env_level.and_then(LogLevel::from_str_loose) {
        return level.as_filter_str().to_string();
    }
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ => DEFAULT_LEVEL.as_filter_str().to_string(),
    }
}

/// Installs the global stderr subscriber.
pub fn init_logging(verbose: bool, level: Option<LogLevel>) {
    let env_level = std::env::var(LOG_ENV).ok();
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter_str = filter_directive(verbose, level, env_level.as_deref(), rust_log.as_deref());

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter_str.as_str())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {e}");
    }
}
