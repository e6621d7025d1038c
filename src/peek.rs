use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::data::loader::load_preview;
use crate::data::model::SamplePreview;

// ---------------------------------------------------------------------------
// Outcome classification
// ---------------------------------------------------------------------------

/// Why a path produced no preview. Both kinds are non-fatal: they are rendered
/// as console notices and never abort the batch. The `Display` forms are the
/// user-visible messages.
#[derive(Debug, Error)]
pub enum PeekError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("Error reading {name}: {cause:#}")]
    Read { name: String, cause: anyhow::Error },
}

/// Result of peeking one path.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: Result<SamplePreview, PeekError>,
}

impl FileReport {
    /// File name for section headers; falls back to the full path when the
    /// path has no final component.
    pub fn display_name(&self) -> String {
        file_name_of(&self.path)
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ---------------------------------------------------------------------------
// The peek operation
// ---------------------------------------------------------------------------

/// Peek every path in order: existence check, then a bounded read of at most
/// `row_limit` data rows. One report per path, in input order; a failure on
/// one path never affects the others, and a missing file is never opened.
pub fn peek(paths: &[PathBuf], row_limit: usize) -> Vec<FileReport> {
    paths
        .iter()
        .map(|path| FileReport {
            path: path.clone(),
            result: peek_one(path, row_limit),
        })
        .collect()
}

fn peek_one(path: &Path, row_limit: usize) -> Result<SamplePreview, PeekError> {
    if !path.is_file() {
        return Err(PeekError::NotFound {
            path: path.to_path_buf(),
        });
    }

    log::debug!("peeking {} (row limit {row_limit})", path.display());

    load_preview(path, row_limit).map_err(|cause| PeekError::Read {
        name: file_name_of(path),
        cause,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;
    use std::fs;

    #[test]
    fn missing_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");

        let reports = peek(&[missing.clone()], 3);
        assert_eq!(reports.len(), 1);
        match &reports[0].result {
            Err(PeekError::NotFound { path }) => assert_eq!(path, &missing),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn failures_are_isolated_and_order_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.csv");
        let bad = dir.path().join("bad.csv");
        let missing = dir.path().join("missing.csv");
        fs::write(&good, "id,price,qty\n1,100.5,2\n").unwrap();
        fs::write(&bad, "a,b\n1,2,3\n").unwrap();

        let paths = vec![missing, bad, good.clone()];
        let reports = peek(&paths, 1);

        assert_eq!(reports.len(), 3);
        assert_eq!(
            reports.iter().map(|r| r.path.clone()).collect::<Vec<_>>(),
            paths
        );
        assert!(matches!(
            reports[0].result,
            Err(PeekError::NotFound { .. })
        ));
        assert!(matches!(reports[1].result, Err(PeekError::Read { .. })));

        let preview = reports[2].result.as_ref().unwrap();
        assert_eq!(preview.columns, vec!["id", "price", "qty"]);
        assert_eq!(
            preview.first_row().unwrap(),
            &[
                CellValue::Integer(1),
                CellValue::Float(100.5),
                CellValue::Integer(2),
            ]
        );
    }

    #[test]
    fn read_error_message_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("trades.csv");
        fs::write(&bad, "a,b\n1\n").unwrap();

        let reports = peek(&[bad], 3);
        let err = reports[0].result.as_ref().unwrap_err();
        assert!(err.to_string().starts_with("Error reading trades.csv:"));
    }

    #[test]
    fn rerun_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.csv");
        fs::write(&path, "a,b\n1,2\n3,4\n").unwrap();

        let first = peek(&[path.clone()], 1);
        let second = peek(&[path], 1);
        let a = first[0].result.as_ref().unwrap();
        let b = second[0].result.as_ref().unwrap();
        assert_eq!(a.columns, b.columns);
        assert_eq!(a.rows, b.rows);
    }
}
