use crate::mapper::build_mapping;
use crate::output::PreviewOutcome;
use crate::scan::list_files;
use anyhow::{ensure, Context, Result};
use std::path::Path;

/// Preview operation - builds the mapping without touching the filesystem
pub fn preview_operation(directory: &Path, base_name: &str) -> Result<PreviewOutcome> {
    ensure!(!base_name.trim().is_empty(), "Name cannot be empty");

    let files = list_files(directory)
        .with_context(|| format!("Failed to list files in {}", directory.display()))?;
    let mapping = build_mapping(&files, base_name);

    Ok(PreviewOutcome {
        directory: directory.to_path_buf(),
        base_name: base_name.to_string(),
        files: files.len(),
        mapping,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn preview_does_not_rename_anything() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("keep.txt"), "k").unwrap();

        let outcome = preview_operation(dir.path(), "New").unwrap();
        assert_eq!(outcome.files, 1);
        assert_eq!(outcome.mapping.pairs[0].generated, "New 1");
        assert!(dir.path().join("keep.txt").exists());
        assert!(!dir.path().join("New 1.txt").exists());
    }
}
