use crate::mapper::{MappingPair, RenameMapping};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Number of missing-source failures within one forward pass that triggers an
/// automatic rollback of everything renamed so far. Three unexpected missing
/// files means the directory no longer matches the snapshot the mapping was
/// built from, and continuing would compound the inconsistency.
pub const ROLLBACK_THRESHOLD: usize = 3;

/// Which way a mapping is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Original name -> generated sequential name.
    Forward,
    /// Generated sequential name -> original name.
    Undo,
}

/// Options for applying a rename mapping.
#[derive(Debug, Clone, Default)]
pub struct TransactionOptions {
    /// Write a timestamped line per rename attempt to this file.
    pub log_file: Option<PathBuf>,
}

/// Fatal errors from a single apply pass. Missing source files are not
/// errors; they are counted in [`TransactionResult`].
#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("insufficient permissions to rename {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to rename {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to open transaction log {}", path.display())]
    Log {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of one apply pass. Constructed fresh per call and discarded after
/// reporting.
#[derive(Debug, Clone)]
pub struct TransactionResult {
    /// Renames that succeeded.
    pub renamed: usize,
    /// Source names that were absent at rename time.
    pub missing: Vec<String>,
    /// Whether the pass stopped early and reversed its completed renames.
    pub rolled_back: bool,
}

/// Tracks one apply pass: completed renames (kept for rollback) and the
/// optional transaction log.
struct TransactionState {
    completed: Vec<(PathBuf, PathBuf)>,
    log_file: Option<File>,
}

impl TransactionState {
    fn new(log_path: Option<&Path>) -> Result<Self, TransactionError> {
        let log_file = match log_path {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).map_err(|source| TransactionError::Log {
                        path: path.to_path_buf(),
                        source,
                    })?;
                }
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|source| TransactionError::Log {
                        path: path.to_path_buf(),
                        source,
                    })?;
                Some(file)
            },
            None => None,
        };

        Ok(Self {
            completed: Vec::new(),
            log_file,
        })
    }

    fn log(&mut self, message: &str) {
        if let Some(ref mut file) = self.log_file {
            // A failed log write must not fail the rename pass.
            let _ = writeln!(
                file,
                "[{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                message
            );
        }
    }
}

/// The filename suffix of `name` including the leading dot, or an empty
/// string when there is none. Leading-dot names like `.gitignore` count as
/// extensionless.
fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

/// The on-disk name a forward rename gives `pair`: the generated sequential
/// name with the original's extension appended.
pub fn destination_name(pair: &MappingPair) -> String {
    format!("{}{}", pair.generated, extension_of(&pair.original))
}

/// Apply `mapping` to the files in `base_dir`, one rename at a time in
/// mapping order.
///
/// Missing source files are tolerated and counted; once
/// [`ROLLBACK_THRESHOLD`] of them accumulate in a `Forward` pass, every
/// completed rename is reversed (best-effort) and the pass stops. An `Undo`
/// pass never rolls back: it runs to the end and reports whatever it managed
/// to revert. A permission failure aborts the whole call immediately with no
/// rollback of prior successes.
pub fn apply_mapping(
    base_dir: &Path,
    mapping: &RenameMapping,
    direction: Direction,
    options: &TransactionOptions,
) -> Result<TransactionResult, TransactionError> {
    let mut state = TransactionState::new(options.log_file.as_deref())?;
    let mut renamed = 0usize;
    let mut missing: Vec<String> = Vec::new();

    for pair in mapping {
        let sequential = destination_name(pair);
        let (source, destination) = match direction {
            Direction::Forward => (pair.original.clone(), sequential),
            Direction::Undo => (sequential, pair.original.clone()),
        };

        let source_path = base_dir.join(&source);
        let destination_path = base_dir.join(&destination);

        match fs::rename(&source_path, &destination_path) {
            Ok(()) => {
                renamed += 1;
                state.log(&format!("renamed {source} -> {destination}"));
                state.completed.push((source_path, destination_path));
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                eprintln!("Missing file: {source}");
                state.log(&format!("missing {source}"));
                missing.push(source);

                if missing.len() == ROLLBACK_THRESHOLD && direction == Direction::Forward {
                    eprintln!("{ROLLBACK_THRESHOLD} rename failures encountered, rolling back...");
                    state.log("rolling back completed renames");
                    roll_back(&mut state);
                    return Ok(TransactionResult {
                        renamed,
                        missing,
                        rolled_back: true,
                    });
                }
            },
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                state.log(&format!("permission denied renaming {source}"));
                return Err(TransactionError::PermissionDenied {
                    path: source_path,
                    source: e,
                });
            },
            Err(e) => {
                state.log(&format!("rename of {source} failed: {e}"));
                return Err(TransactionError::Io {
                    path: source_path,
                    source: e,
                });
            },
        }
    }

    Ok(TransactionResult {
        renamed,
        missing,
        rolled_back: false,
    })
}

/// Reverse every completed rename, in completion order. Each reversal is
/// best-effort: a failure is logged and the loop continues.
fn roll_back(state: &mut TransactionState) {
    let completed = std::mem::take(&mut state.completed);
    for (source, destination) in completed {
        if let Err(e) = fs::rename(&destination, &source) {
            eprintln!("Failed to restore {}: {e}", source.display());
            state.log(&format!("failed to restore {}: {e}", source.display()));
        }
    }
}
