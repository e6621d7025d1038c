use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print CSV column headers and a sample row for quick manual inspection.
///
/// Every path is processed in order; a missing or unreadable file gets a
/// notice and the rest of the batch still runs. The exit status does not
/// depend on per-file outcomes.
#[derive(Debug, Parser)]
#[command(name = "csv-peek", version)]
pub struct Cli {
    /// CSV files to inspect, processed in the given order.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Maximum number of data rows to decode per file.
    #[arg(
        short = 'n',
        long = "rows",
        default_value_t = 3,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub rows: u32,

    /// Print only the column names, no sample row.
    #[arg(long)]
    pub columns_only: bool,

    /// Console text or machine-readable JSON.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
