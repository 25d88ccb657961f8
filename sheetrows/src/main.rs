use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use sheetpeek_core::{PeekConfig, logging, print_rows, read_sheet};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "sheetrows")]
#[command(about = "Print the non-blank cells of one sheet, row by row", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Excel/ODS file (defaults to the configured workbook)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Sheet to print (defaults to the configured sheet)
    #[arg(short, long, value_name = "NAME")]
    sheet: Option<String>,
}

fn main() {
    logging::init();

    if let Err(err) = run(Cli::parse()) {
        report(&err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = PeekConfig::load(cli.config.as_deref())?;
    if let Some(sheet) = cli.sheet {
        config.sheet = sheet;
        config.validate()?;
    }

    let file = cli.file.unwrap_or_else(|| config.workbook.clone());
    debug!(file = %file.display(), sheet = %config.sheet, "printing sheet rows");

    let sheet = read_sheet(&file, &config.sheet, &config.read_options())
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    print_rows(&mut out, &sheet)?;
    out.flush()?;

    Ok(())
}

fn report(err: &anyhow::Error) {
    eprintln!("{} {}", "error:".red().bold(), err);
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "caused by:".yellow(), cause);
    }
}
