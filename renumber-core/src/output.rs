use crate::mapper::RenameMapping;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a rename operation
#[derive(Debug, Serialize, Deserialize)]
pub struct RenameOutcome {
    pub directory: PathBuf,
    pub base_name: String,
    /// Files found in the directory when the mapping was built.
    pub files: usize,
    pub renamed: usize,
    pub missing: Vec<String>,
    pub rolled_back: bool,
}

/// Result of an undo operation
#[derive(Debug, Serialize, Deserialize)]
pub struct UndoOutcome {
    pub directory: PathBuf,
    pub reverted: usize,
    pub missing: Vec<String>,
}

/// Result of a preview (dry-run) operation
#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewOutcome {
    pub directory: PathBuf,
    pub base_name: String,
    pub files: usize,
    pub mapping: RenameMapping,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RenameOutcome {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "rename",
            "directory": self.directory,
            "base_name": self.base_name,
            "summary": {
                "files": self.files,
                "renamed": self.renamed,
                "missing": self.missing,
                "rolled_back": self.rolled_back,
            },
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        if self.rolled_back {
            writeln!(
                output,
                "Rolled back: {} files were missing, all completed renames were reversed",
                self.missing.len()
            )
            .unwrap();
            return output;
        }

        writeln!(output, "{} files were renamed successfully", self.renamed).unwrap();
        if !self.missing.is_empty() {
            writeln!(output, "Missing: {}", self.missing.join(", ")).unwrap();
        }

        output
    }
}

impl OutputFormatter for UndoOutcome {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "undo",
            "directory": self.directory,
            "summary": {
                "reverted": self.reverted,
                "missing": self.missing,
            },
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        writeln!(output, "{} files were reverted successfully", self.reverted).unwrap();
        if !self.missing.is_empty() {
            writeln!(output, "Missing: {}", self.missing.join(", ")).unwrap();
        }

        output
    }
}

impl OutputFormatter for PreviewOutcome {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "preview",
            "directory": self.directory,
            "base_name": self.base_name,
            "summary": {
                "files": self.files,
            },
            "mapping": self.mapping,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!(
            "{} files would be renamed in {}\n",
            self.files,
            self.directory.display()
        )
    }
}
