//! Command execution handlers.

use std::io::{self, Write};

use anyhow::Result;
use drive_search::{DriveSearch, ResultList, SearchConfig, SnapshotInfo};
use serde::Serialize;
use tracing::debug;

use super::args::{Cli, Commands, FoldersArgs, SearchArgs, StatusArgs};

/// Builds the search configuration, honoring `--snapshot`.
pub fn build_config(cli: &Cli) -> SearchConfig {
    match &cli.snapshot {
        Some(path) => SearchConfig::new(path),
        None => SearchConfig::default(),
    }
}

/// Runs the parsed command, writing its output to stdout.
pub fn dispatch_command(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(&cli, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Runs the parsed command, writing its output to `out`.
pub fn run_command(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = build_config(cli);
    debug!(snapshot = %config.snapshot_path.display(), "Resolved snapshot path");
    let search = DriveSearch::new(config);

    match &cli.command {
        Commands::Search(args) => run_search(&search, args, out),
        Commands::Status(args) => run_status(&search, args, out),
        Commands::Folders(args) => run_folders(&search, args, out),
    }
}

fn run_search(search: &DriveSearch, args: &SearchArgs, out: &mut impl Write) -> Result<()> {
    if args.refresh {
        search.force_reload();
    }

    let items = ResultList::from(search.search_with_limit(&args.query_string(), args.limit));
    if args.pretty {
        writeln!(out, "{}", serde_json::to_string_pretty(&items)?)?;
    } else {
        writeln!(out, "{}", serde_json::to_string(&items)?)?;
    }
    Ok(())
}

fn run_status(search: &DriveSearch, args: &StatusArgs, out: &mut impl Write) -> Result<()> {
    let info = search.snapshot_info();

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
        return Ok(());
    }

    write_status_text(&info, out)
}

fn write_status_text(info: &SnapshotInfo, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Snapshot Information")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "  Location:   {}", info.snapshot_path.display())?;

    if !info.loaded {
        writeln!(out, "  Loaded:     no")?;
        writeln!(out)?;
        writeln!(out, "No snapshot available. Run a sync first.")?;
        return Ok(());
    }

    writeln!(out, "  Loaded:     yes")?;
    writeln!(out, "  Files:      {}", info.files)?;
    writeln!(out, "  Folders:    {}", info.folders)?;
    if let Some(last_sync) = info.last_sync {
        writeln!(out, "  Last sync:  {}", last_sync.to_rfc3339())?;
    }
    writeln!(
        out,
        "  Sync token: {}",
        if info.has_sync_token { "present" } else { "none" }
    )?;
    Ok(())
}

/// One folder in `folders --json` output.
#[derive(Debug, Serialize)]
struct FolderEntry {
    id: String,
    name: String,
}

fn run_folders(search: &DriveSearch, args: &FoldersArgs, out: &mut impl Write) -> Result<()> {
    let folders = search.folders();

    if args.json {
        let entries: Vec<FolderEntry> = folders
            .into_iter()
            .map(|(id, name)| FolderEntry { id, name })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(());
    }

    for (id, name) in folders {
        writeln!(out, "{name}\t{id}")?;
    }
    Ok(())
}
