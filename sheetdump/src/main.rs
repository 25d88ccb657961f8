use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use sheetpeek_core::{PeekConfig, dump_workbook, logging, read_workbook};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "sheetdump")]
#[command(about = "Dump every sheet of a workbook as aligned text tables", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Excel/ODS file (defaults to the configured workbook)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Widest cell text shown before it is cut short with "..."
    #[arg(long, value_name = "N")]
    max_colwidth: Option<usize>,
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
    if let Some(width) = cli.max_colwidth {
        config.max_colwidth = width;
        config.validate()?;
    }

    let file = cli.file.unwrap_or_else(|| config.workbook.clone());
    debug!(file = %file.display(), max_colwidth = config.max_colwidth, "dumping workbook");

    let workbook = read_workbook(&file, &config.read_options())
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    dump_workbook(&mut out, &workbook, config.max_colwidth)?;
    out.flush()?;

    Ok(())
}

fn report(err: &anyhow::Error) {
    eprintln!("{} {}", "error:".red().bold(), err);
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "caused by:".yellow(), cause);
    }
}
