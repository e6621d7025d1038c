use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// CellValue – a single decoded field of a data row
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring how Pandas would sniff a CSV field.
/// Serializes untagged so JSON output carries plain scalars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl CellValue {
    /// Classify a raw CSV field. Empty fields count as missing.
    pub fn from_field(s: &str) -> Self {
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

// ---------------------------------------------------------------------------
// SamplePreview – the bounded prefix of one tabular file
// ---------------------------------------------------------------------------

/// Column names and up to `row_limit` decoded data rows from one file.
///
/// Column names keep the header's order and may repeat; rows are positional,
/// aligned with `columns`. The whole thing is transient: built by the loader,
/// rendered once, discarded.
#[derive(Debug, Clone, Serialize)]
pub struct SamplePreview {
    /// Ordered column names from the header row.
    pub columns: Vec<String>,
    /// Decoded data rows, one `CellValue` per column.
    pub rows: Vec<Vec<CellValue>>,
}

impl SamplePreview {
    /// First decoded data row, if the file had any.
    pub fn first_row(&self) -> Option<&[CellValue]> {
        self.rows.first().map(|r| r.as_slice())
    }
}
