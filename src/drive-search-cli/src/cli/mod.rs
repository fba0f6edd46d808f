//! CLI argument parsing and command dispatch.
//!
//! - `args` - Command-line argument structures
//! - `handlers` - Command execution handlers

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands, FoldersArgs, LogLevel, SearchArgs, StatusArgs};
pub use handlers::{build_config, dispatch_command, run_command};
