//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core business logic for each renumber operation,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod preview;
pub mod rename;
pub mod undo;

// Re-export the main operation functions for easy access
pub use preview::preview_operation;
pub use rename::rename_operation;
pub use undo::undo_operation;
