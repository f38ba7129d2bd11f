use crate::cli::OutputFormat;
use crate::prompt;
use anyhow::{anyhow, Result};
use renumber_core::{preview_operation, render_mapping, OutputFormatter};
use std::path::PathBuf;

pub fn handle_preview(
    name: Option<String>,
    dir: Option<PathBuf>,
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

    let outcome = preview_operation(&directory, &base_name)?;

    match output {
        OutputFormat::Json => println!("{}", outcome.format_json()),
        OutputFormat::Summary => {
            if !outcome.mapping.is_empty() {
                println!("{}", render_mapping(&outcome.mapping, use_color));
            }
            print!("{}", outcome.format_summary());
        },
    }

    Ok(())
}
