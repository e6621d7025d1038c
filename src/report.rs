use std::fmt::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::data::model::CellValue;
use crate::peek::{FileReport, PeekError};

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

/// Render reports as the human-readable console text.
///
/// Per file: a blank line, a `--- <file name> ---` header, the ordered column
/// list, and (unless `columns_only`) the first sample row. A missing file is
/// exactly one notice line with no section header; a failed read keeps its
/// section header followed by the error notice.
pub fn render_text(reports: &[FileReport], columns_only: bool) -> String {
    let mut out = String::new();
    for report in reports {
        match &report.result {
            Ok(preview) => {
                writeln!(out, "\n--- {} ---", report.display_name()).ok();
                writeln!(out, "{:?}", preview.columns).ok();
                if !columns_only {
                    if let Some(row) = preview.first_row() {
                        writeln!(out, "{}", render_row(row)).ok();
                    }
                }
            }
            Err(err @ PeekError::Read { .. }) => {
                writeln!(out, "\n--- {} ---", report.display_name()).ok();
                writeln!(out, "{err}").ok();
            }
            Err(err @ PeekError::NotFound { .. }) => {
                writeln!(out, "{err}").ok();
            }
        }
    }
    out
}

fn render_row(row: &[CellValue]) -> String {
    row.iter()
        .map(|cell| cell.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// JSON rendering
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct JsonReport<'a> {
    path: String,
    #[serde(flatten)]
    status: Status<'a>,
}

/// Rows stay positional arrays so duplicate column names survive.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Status<'a> {
    Ok {
        columns: &'a [String],
        rows: &'a [Vec<CellValue>],
    },
    NotFound,
    Error {
        error: String,
    },
}

/// Render reports as a JSON array, one object per input path, in input order.
pub fn render_json(reports: &[FileReport]) -> Result<String> {
    let entries: Vec<JsonReport<'_>> = reports
        .iter()
        .map(|report| JsonReport {
            path: report.path.display().to_string(),
            status: match &report.result {
                Ok(preview) => Status::Ok {
                    columns: &preview.columns,
                    rows: &preview.rows,
                },
                Err(PeekError::NotFound { .. }) => Status::NotFound,
                Err(err @ PeekError::Read { .. }) => Status::Error {
                    error: err.to_string(),
                },
            },
        })
        .collect();

    let mut text = serde_json::to_string_pretty(&entries).context("serializing reports")?;
    text.push('\n');
    Ok(text)
}
