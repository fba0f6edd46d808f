//! Fuzzy drive search CLI library module.
//!
//! - `cli/` - Argument parsing and command handlers
//! - `logging` - stderr log setup

pub mod cli;
pub mod logging;
