#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod mapper;
pub mod operations;
pub mod output;
pub mod preview;
pub mod scan;
pub mod transaction;

pub use config::Config;
pub use mapper::{build_mapping, MappingPair, RenameMapping};
pub use operations::{preview_operation, rename_operation, undo_operation};
pub use output::{OutputFormat, OutputFormatter, PreviewOutcome, RenameOutcome, UndoOutcome};
pub use preview::{render_heading, render_mapping};
pub use scan::{list_files, FileEntry};
pub use transaction::{
    apply_mapping, destination_name, Direction, TransactionError, TransactionOptions,
    TransactionResult, ROLLBACK_THRESHOLD,
};
