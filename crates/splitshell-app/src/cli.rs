use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Splitshell: drive the split layout engine headlessly and inspect the
/// ratios it persists.
#[derive(Parser, Debug)]
#[command(name = "splitshell", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `debug` or `splitshell_layout=trace`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Storage file holding persisted layouts.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a layout from a JSON script, feed it the scripted events and
    /// print the resulting ratios and widths.
    Replay { script: PathBuf },
    /// Print the persisted ratios for a container.
    Show { container_id: String },
    /// Forget the persisted ratios for a container.
    Reset { container_id: String },
}

pub fn parse() -> Args {
    Args::parse()
}
