use std::path::PathBuf;

use clap::Parser;

/// Main command-line interface for the Spyglass dashboard filter
///
/// Spyglass narrows a Project → Service → Task tree to what you are
/// looking for: a free-text search term and an optional "only active
/// work" toggle. It reads the tree as JSON (the same shape the
/// dashboard's query layer produces) and prints the filtered tree as
/// markdown or JSON.
#[derive(Parser)]
#[command(version, about, name = "sg")]
pub struct Args {
    /// Path to the project tree JSON file. Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Free-text search term; matches cascade from project names down
    /// to task names
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Show only active work (tasks in progress or pending)
    #[arg(short = 'a', long)]
    pub active_only: bool,

    /// Emit the filtered tree as JSON instead of markdown
    #[arg(long)]
    pub json: bool,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,
}
