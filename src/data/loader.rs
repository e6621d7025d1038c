use std::path::Path;

use anyhow::{Context, Result};

use super::model::{CellValue, SamplePreview};

/// Read the header row and at most `row_limit` data rows from a CSV file.
///
/// The reader streams, so only the bounded prefix is ever decoded no matter
/// how large the file is. The file handle is dropped when the reader goes out
/// of scope, on the error paths too.
///
/// Inconsistent field counts and undecodable bytes surface as errors; the
/// caller decides what a failed read means.
pub fn load_preview(path: &Path, row_limit: usize) -> Result<SamplePreview> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;

    let columns: Vec<String> = reader
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::with_capacity(row_limit);
    for result in reader.records().take(row_limit) {
        let record = result.with_context(|| format!("CSV row {}", rows.len() + 1))?;
        rows.push(record.iter().map(CellValue::from_field).collect());
    }

    log::debug!(
        "read {} columns, {} data rows from {}",
        columns.len(),
        rows.len(),
        path.display()
    );

    Ok(SamplePreview { columns, rows })
}
