use crate::mapper::RenameMapping;
use crate::output::UndoOutcome;
use crate::transaction::{apply_mapping, Direction, TransactionOptions};
use anyhow::{Context, Result};
use std::path::Path;

/// Undo operation - reverts a forward pass using the same mapping
///
/// Always processes every pair: missing generated-named files are reported
/// in the outcome, never rolled back.
pub fn undo_operation(
    directory: &Path,
    mapping: &RenameMapping,
    options: &TransactionOptions,
) -> Result<UndoOutcome> {
    let result = apply_mapping(directory, mapping, Direction::Undo, options)
        .with_context(|| format!("Failed to revert files in {}", directory.display()))?;

    Ok(UndoOutcome {
        directory: directory.to_path_buf(),
        reverted: result.renamed,
        missing: result.missing,
    })
}
