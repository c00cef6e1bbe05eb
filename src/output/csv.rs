//! CSV report writer

use log::{info, warn};
use std::fs;
use std::path::Path;

use crate::error::Result;

use super::ReportRow;

/// Column header, matching the report's fixed schema
const HEADER: &str =
    "Filter name,Owner,Share Permissions,Edit Permissions,Is Writable,Approximate Last Used";

/// Write the report to `path`.
///
/// When `rows` is empty a warning is logged and no file is created or
/// overwritten. An absent last-used timestamp renders as an empty cell.
pub fn write_report(rows: &[ReportRow], path: &Path) -> Result<bool> {
    if rows.is_empty() {
        warn!("No filter details to save.");
        return Ok(false);
    }

    let mut out = String::with_capacity(rows.len() * 64);
    out.push_str(HEADER);
    out.push('\n');

    for row in rows {
        out.push_str(&format_row(row));
        out.push('\n');
    }

    info!("Saving data to CSV: {}", path.display());
    fs::write(path, out)?;
    Ok(true)
}

fn format_row(row: &ReportRow) -> String {
    format!(
        "{},{},{},{},{},{}",
        escape_csv(&row.filter_name),
        escape_csv(&row.owner),
        escape_csv(&row.share_permissions),
        escape_csv(&row.edit_permissions),
        row.is_writable,
        escape_csv(row.approximate_last_used.as_deref().unwrap_or("")),
    )
}

/// Escape a value for CSV output
fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
