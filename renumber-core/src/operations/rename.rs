use crate::mapper::{build_mapping, RenameMapping};
use crate::output::RenameOutcome;
use crate::preview::{render_heading, render_mapping};
use crate::scan::list_files;
use crate::transaction::{apply_mapping, Direction, TransactionOptions};
use anyhow::{ensure, Context, Result};
use std::path::Path;

/// Rename operation - returns structured data plus the mapping
///
/// Scans `directory`, builds the sequential mapping, and applies it forward.
/// The mapping is returned to the caller so it can drive a later revert in
/// the same run; nothing is persisted.
pub fn rename_operation(
    directory: &Path,
    base_name: &str,
    show_preview: bool,
    use_color: bool,
    options: &TransactionOptions,
) -> Result<(RenameOutcome, RenameMapping)> {
    ensure!(!base_name.trim().is_empty(), "Name cannot be empty");

    let files = list_files(directory)
        .with_context(|| format!("Failed to list files in {}", directory.display()))?;
    let mapping = build_mapping(&files, base_name);

    if show_preview && !mapping.is_empty() {
        eprintln!("{}", render_heading(directory, mapping.len(), use_color));
        eprintln!("{}", render_mapping(&mapping, use_color));
    }

    let result = apply_mapping(directory, &mapping, Direction::Forward, options)
        .with_context(|| format!("Failed to rename files in {}", directory.display()))?;

    let outcome = RenameOutcome {
        directory: directory.to_path_buf(),
        base_name: base_name.to_string(),
        files: files.len(),
        renamed: result.renamed,
        missing: result.missing,
        rolled_back: result.rolled_back,
    };

    Ok((outcome, mapping))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn renames_sorted_files_in_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.png"), "a").unwrap();
        fs::write(dir.path().join("c"), "c").unwrap();

        let (outcome, mapping) = rename_operation(
            dir.path(),
            "Vacation",
            false,
            false,
            &TransactionOptions::default(),
        )
        .unwrap();

        assert_eq!(outcome.files, 3);
        assert_eq!(outcome.renamed, 3);
        assert!(!outcome.rolled_back);

        // Lexicographic scan order drives the numbering.
        assert_eq!(mapping.pairs[0].original, "a.png");
        assert!(dir.path().join("Vacation 1.png").exists());
        assert!(dir.path().join("Vacation 2.txt").exists());
        assert!(dir.path().join("Vacation 3").exists());
    }

    #[test]
    fn empty_directory_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let (outcome, mapping) = rename_operation(
            dir.path(),
            "Trip",
            false,
            false,
            &TransactionOptions::default(),
        )
        .unwrap();

        assert_eq!(outcome.files, 0);
        assert_eq!(outcome.renamed, 0);
        assert!(mapping.is_empty());
    }

    #[test]
    fn empty_base_name_is_rejected() {
        let dir = TempDir::new().unwrap();
        let result = rename_operation(
            dir.path(),
            "   ",
            false,
            false,
            &TransactionOptions::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = rename_operation(
            &dir.path().join("absent"),
            "Trip",
            false,
            false,
            &TransactionOptions::default(),
        );
        assert!(result.is_err());
    }
}
