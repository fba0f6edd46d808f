//! Fuzzy drive search CLI entry point.
//!
//! Prints launcher JSON on stdout; logs go to stderr.

use anyhow::Result;
use clap::Parser;
use drive_search_cli::cli::{Cli, dispatch_command};
use drive_search_cli::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_level);

    dispatch_command(cli)
}
