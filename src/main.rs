//! Diffmeta: print the per-file header metadata of a patch.
//!
//! This is the entry point for the `diffmeta` CLI. It parses arguments, sets
//! up logging, loads parse options, and writes one JSON object per file header
//! found in the patch.

mod cli;
mod logging;

use anyhow::{Context, Result};
use cli::Cli;
use diffmeta::{HeaderParser, LineSource, ParseOptions, ReaderLines};
use std::fs;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(logging::Verbosity::from_flags(cli.verbose, cli.quiet));

    match run(&cli) {
        Ok(count) => {
            tracing::debug!(files = count, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<usize> {
    let options = load_options(cli)?;

    match cli.patch_path() {
        Some(path) => {
            let file = fs::File::open(path)
                .with_context(|| format!("failed to open patch '{}'", path.display()))?;
            print_headers(ReaderLines::new(BufReader::new(file)), options)
        }
        None => print_headers(ReaderLines::new(io::stdin().lock()), options),
    }
}

fn load_options(cli: &Cli) -> Result<ParseOptions> {
    let mut options = match &cli.config {
        Some(path) => ParseOptions::load(path)?,
        None => ParseOptions::default(),
    };
    if let Some(strip) = cli.strip {
        options = options.with_strip_components(strip);
        options.validate()?;
    }
    tracing::debug!(?options, "parse options");
    Ok(options)
}

/// Write each header as one line of JSON. Returns the number of headers.
fn print_headers<S: LineSource>(source: S, options: ParseOptions) -> Result<usize> {
    let mut parser = HeaderParser::with_options(source, options).collect_preamble(false);
    let mut out = io::stdout().lock();
    let mut count = 0;

    while let Some(header) = parser.next_file()? {
        serde_json::to_writer(&mut out, &header).context("failed to write output")?;
        writeln!(out).context("failed to write output")?;
        count += 1;
    }

    out.flush().context("failed to write output")?;
    Ok(count)
}
