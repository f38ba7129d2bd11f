use clap::Parser;
use std::io::{self, IsTerminal};
use std::process;

mod cli;
mod preview;
mod prompt;
mod rename;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && io::stdout().is_terminal();

    let result = match cli.command {
        Commands::Rename {
            name,
            dir,
            keep,
            undo,
            no_preview,
            log_file,
            output,
        } => rename::handle_rename(
            name, dir, keep, undo, no_preview, log_file, output, use_color,
        ),

        Commands::Preview { name, dir, output } => {
            preview::handle_preview(name, dir, output, use_color)
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(2);
    }
}
