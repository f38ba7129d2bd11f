use crate::scan::FileEntry;
use serde::{Deserialize, Serialize};

/// A single `generated -> original` pair in a rename mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingPair {
    /// The sequential name assigned to the file, without its extension.
    pub generated: String,
    /// The file's name at the time the mapping was built.
    pub original: String,
}

/// An ordered, bijective mapping from generated names to original names.
///
/// Generated names are unique by construction (strictly increasing counter),
/// and each original name appears exactly once, in the order the files were
/// supplied. The mapping is read-only once built: the same instance drives
/// both the forward rename and a later revert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameMapping {
    pub pairs: Vec<MappingPair>,
}

impl RenameMapping {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MappingPair> {
        self.pairs.iter()
    }
}

impl<'a> IntoIterator for &'a RenameMapping {
    type Item = &'a MappingPair;
    type IntoIter = std::slice::Iter<'a, MappingPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Build the mapping for renaming `files` to `"{base_name} 1"`,
/// `"{base_name} 2"`, and so on, in the order given.
///
/// Pure and deterministic: an empty file list produces an empty mapping, and
/// the counter advances once per entry regardless of any property of the
/// file. Base-name validation (non-empty) is the caller's job.
pub fn build_mapping(files: &[FileEntry], base_name: &str) -> RenameMapping {
    let pairs = files
        .iter()
        .enumerate()
        .map(|(index, file)| MappingPair {
            generated: format!("{} {}", base_name, index + 1),
            original: file.name.clone(),
        })
        .collect();

    RenameMapping { pairs }
}
