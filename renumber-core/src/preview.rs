use crate::mapper::RenameMapping;
use crate::transaction;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::path::Path;

/// Render a mapping as an `Old name` / `New name` table.
///
/// The new-name column shows the destination exactly as it will appear on
/// disk, extension included.
pub fn render_mapping(mapping: &RenameMapping, use_color: bool) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("Old name").fg(Color::Cyan),
            Cell::new("New name").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Old name", "New name"]);
    }

    for pair in mapping {
        let destination = transaction::destination_name(pair);
        if use_color {
            table.add_row(vec![
                Cell::new(&pair.original).fg(Color::Red),
                Cell::new(destination).fg(Color::Green),
            ]);
        } else {
            table.add_row(vec![pair.original.clone(), destination]);
        }
    }

    table.to_string()
}

/// One-line heading printed above the table in interactive mode.
pub fn render_heading(dir: &Path, count: usize, use_color: bool) -> String {
    let heading = format!("Renaming {count} files in {}", dir.display());
    if use_color {
        nu_ansi_term::Color::Cyan.bold().paint(heading).to_string()
    } else {
        heading
    }
}
