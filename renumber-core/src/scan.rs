use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use walkdir::WalkDir;

/// A file that existed in the target directory when it was scanned. Captured
/// once, before the mapping is built, and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileEntry {
    /// File name relative to the scanned directory.
    pub name: String,
}

impl FileEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// List the regular files directly inside `dir`, sorted by name.
///
/// Subdirectories are not descended into and are not returned. The sort is
/// what makes the sequential numbering deterministic, so it must stay stable.
/// Files with non-UTF-8 names are skipped with a warning.
pub fn list_files(dir: &Path) -> Result<Vec<FileEntry>> {
    ensure!(dir.is_dir(), "not a directory: {}", dir.display());

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("failed to read directory {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => files.push(FileEntry::new(name)),
            None => eprintln!(
                "Skipping file with non-UTF-8 name: {}",
                entry.path().display()
            ),
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_only_regular_files_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.png"), "a").unwrap();
        fs::write(dir.path().join("c"), "c").unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();
        fs::write(dir.path().join("subdir").join("nested.txt"), "n").unwrap();

        let files = list_files(dir.path()).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.txt", "c"]);
    }

    #[test]
    fn empty_directory_yields_empty_list() {
        let dir = TempDir::new().unwrap();
        assert!(list_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = list_files(&dir.path().join("nope"));
        assert!(result.is_err());
    }
}
