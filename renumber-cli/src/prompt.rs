use anyhow::{ensure, Context, Result};
use renumber_core::Config;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// What the user chose at the post-rename undo prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoChoice {
    Undo,
    Keep,
}

pub fn load_config() -> Config {
    config_path()
        .and_then(|path| Config::load_from(&path).ok())
        .unwrap_or_default()
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("renumber").join("config.toml"))
}

/// Resolve the directory to operate on. An explicit `--dir` wins; otherwise
/// the user picks a folder inside the configured base directory (the
/// platform Downloads folder by default).
pub fn resolve_directory(
    dir: Option<PathBuf>,
    config: &Config,
    attempts: u32,
) -> Result<PathBuf> {
    if let Some(dir) = dir {
        ensure!(dir.is_dir(), "not a directory: {}", dir.display());
        return Ok(dir);
    }

    let base = config
        .defaults
        .base_directory
        .clone()
        .or_else(dirs::download_dir)
        .context("Could not locate a Downloads directory; pass --dir")?;

    prompt_directory(&base, attempts)?.context("Maximum input attempts exceeded")
}

pub fn prompt_directory(base: &Path, attempts: u32) -> Result<Option<PathBuf>> {
    prompt_directory_with_input(&mut io::stdin().lock(), base, attempts)
}

/// Ask for a folder name under `base`, up to `attempts` times. Returns `None`
/// when the attempts are exhausted (including EOF on the input).
pub fn prompt_directory_with_input<R: BufRead>(
    reader: &mut R,
    base: &Path,
    attempts: u32,
) -> Result<Option<PathBuf>> {
    for _ in 0..attempts {
        eprint!(
            "Where would you like to rename files? Give the name of a folder inside {}: ",
            base.display()
        );
        io::stderr().flush()?;

        let mut input = String::new();
        if reader
            .read_line(&mut input)
            .context("Failed to read user input")?
            == 0
        {
            break;
        }
        let folder = input.trim();

        if folder.is_empty() {
            eprintln!("Folder name cannot be empty");
            continue;
        }
        let target = base.join(folder);
        if target.is_dir() {
            return Ok(Some(target));
        }
        eprintln!("Folder not found, please try again");
    }

    Ok(None)
}

pub fn prompt_base_name(attempts: u32) -> Result<Option<String>> {
    prompt_base_name_with_input(&mut io::stdin().lock(), attempts)
}

/// Ask for a non-empty base name, up to `attempts` times.
pub fn prompt_base_name_with_input<R: BufRead>(
    reader: &mut R,
    attempts: u32,
) -> Result<Option<String>> {
    for _ in 0..attempts {
        eprint!(
            "What do you want to call the files? They will be named like: (name) 1, (name) 2, and so on: "
        );
        io::stderr().flush()?;

        let mut input = String::new();
        if reader
            .read_line(&mut input)
            .context("Failed to read user input")?
            == 0
        {
            break;
        }
        let name = input.trim();

        if name.is_empty() {
            eprintln!("Name cannot be empty");
            continue;
        }
        return Ok(Some(name.to_string()));
    }

    Ok(None)
}

pub fn prompt_undo_choice(attempts: u32) -> Result<Option<UndoChoice>> {
    prompt_undo_choice_with_input(&mut io::stdin().lock(), attempts)
}

/// Ask whether to undo the rename. `None` means the attempts were exhausted;
/// the caller reverts automatically in that case.
pub fn prompt_undo_choice_with_input<R: BufRead>(
    reader: &mut R,
    attempts: u32,
) -> Result<Option<UndoChoice>> {
    for _ in 0..attempts {
        eprint!("Undo this change? (y/n): ");
        io::stderr().flush()?;

        let mut input = String::new();
        if reader
            .read_line(&mut input)
            .context("Failed to read user input")?
            == 0
        {
            break;
        }

        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(Some(UndoChoice::Undo)),
            "n" | "no" => return Ok(Some(UndoChoice::Keep)),
            "" => eprintln!("Input cannot be empty"),
            _ => eprintln!("Please pick between y or n"),
        }
    }

    Ok(None)
}
