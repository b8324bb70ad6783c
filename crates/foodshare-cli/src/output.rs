//! Plain-text table printing and CSV file writing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use foodshare_report::TableView;

/// Column widths are measured in chars; cells are left-aligned.
pub fn format_table(view: &TableView) -> String {
    let mut widths: Vec<usize> = view.headers.iter().map(|h| h.chars().count()).collect();
    for row in &view.rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(display_cell(cell).chars().count());
            }
        }
    }

    let mut out = String::new();
    push_line(&mut out, view.headers.iter().map(String::as_str), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &view.rows {
        let cells: Vec<String> = row.iter().map(|c| display_cell(c)).collect();
        push_line(&mut out, cells.iter().map(String::as_str), &widths);
    }
    out
}

fn display_cell(cell: &str) -> String {
    cell.replace(['\r', '\n'], " ")
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

/// Write CSV text, creating parent directories as needed.
pub fn write_export(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))
}
