use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Rename every file in a folder to a sequential scheme, with revert
#[derive(Parser, Debug)]
#[command(name = "renumber")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename files to "<name> 1", "<name> 2", ... keeping their extensions
    Rename {
        /// Base name for the renamed files (prompted for when omitted)
        name: Option<String>,

        /// Folder to rename files in (prompted for when omitted)
        #[arg(short, long, value_name = "PATH")]
        dir: Option<PathBuf>,

        /// Keep the result without asking to undo
        #[arg(long, conflicts_with = "undo")]
        keep: bool,

        /// Revert immediately after renaming, without asking
        #[arg(long)]
        undo: bool,

        /// Skip the old -> new preview table
        #[arg(long)]
        no_preview: bool,

        /// Write a timestamped transaction log to this file
        #[arg(long, value_name = "PATH")]
        log_file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Show the mapping that `rename` would apply, without changing anything
    Preview {
        /// Base name for the renamed files (prompted for when omitted)
        name: Option<String>,

        /// Folder to preview (prompted for when omitted)
        #[arg(short, long, value_name = "PATH")]
        dir: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}
