mod cli;
mod data;
mod peek;
mod report;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, OutputFormat};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let reports = peek::peek(&cli.paths, cli.rows as usize);

    let rendered = match cli.format {
        OutputFormat::Text => report::render_text(&reports, cli.columns_only),
        OutputFormat::Json => report::render_json(&reports)?,
    };
    print!("{rendered}");
    Ok(())
}
