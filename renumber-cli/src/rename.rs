use crate::cli::OutputFormat;
use crate::prompt::{self, UndoChoice};
use anyhow::{anyhow, Result};
use renumber_core::{rename_operation, undo_operation, OutputFormatter, TransactionOptions};
use std::path::PathBuf;

#[allow(clippy::too_many_arguments)]
#[allow(clippy::fn_params_excessive_bools)]
pub fn handle_rename(
    name: Option<String>,
    dir: Option<PathBuf>,
    keep: bool,
    undo: bool,
    no_preview: bool,
    log_file: Option<PathBuf>,
    output: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let config = prompt::load_config();
    let attempts = config.defaults.max_prompt_attempts;

    let directory = prompt::resolve_directory(dir, &config, attempts)?;
    let base_name = match name {
        Some(name) => name,
        None => prompt::prompt_base_name(attempts)?
            .ok_or_else(|| anyhow!("Maximum input attempts exceeded"))?,
    };

    let options = TransactionOptions { log_file };
    let show_preview =
        !no_preview && config.defaults.show_preview && output == OutputFormat::Summary;

    let (outcome, mapping) =
        rename_operation(&directory, &base_name, show_preview, use_color, &options)?;
    print!("{}", outcome.format(output.into()));
    if output == OutputFormat::Json {
        println!();
    }

    // Nothing left to revert after a rollback or an empty pass.
    if outcome.rolled_back || mapping.is_empty() || keep {
        return Ok(());
    }

    if undo {
        let undone = undo_operation(&directory, &mapping, &options)?;
        print!("{}", undone.format(output.into()));
        if output == OutputFormat::Json {
            println!();
        }
        return Ok(());
    }

    match prompt::prompt_undo_choice(attempts)? {
        Some(UndoChoice::Keep) => Ok(()),
        Some(UndoChoice::Undo) => {
            let undone = undo_operation(&directory, &mapping, &options)?;
            print!("{}", undone.format(output.into()));
            if output == OutputFormat::Json {
                println!();
            }
            Ok(())
        },
        None => {
            // Exhausted prompt attempts default to reverting the change.
            let undone = undo_operation(&directory, &mapping, &options)?;
            eprint!("{}", undone.format_summary());
            Err(anyhow!(
                "Maximum input attempts exceeded, changes were reverted"
            ))
        },
    }
}
