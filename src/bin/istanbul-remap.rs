//! istanbul-remap: remap istanbul coverage of generated code onto original sources.

use anyhow::{Context, Result};
use clap::Parser;
use istanbul_remap::{validate_coverage_data, OutputStyle, Remapper};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Remap istanbul coverage of bundled code onto the original sources.
#[derive(Debug, Parser)]
#[command(name = "istanbul-remap")]
#[command(version, about, long_about = None)]
struct Args {
    /// Coverage JSON to read, stdin if omitted
    input: Option<PathBuf>,

    /// Where to write the remapped coverage, stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write compact JSON
    #[arg(long)]
    compact: bool,

    /// Only validate the input
    #[arg(long)]
    validate: bool,

    /// More logging on stderr (-v, -vv, -vvv), overridden by RUST_LOG
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let input = read_input(args.input.as_deref())?;

    validate_coverage_data(&input).context("invalid coverage data")?;
    if args.validate {
        tracing::info!("coverage data is valid");
        return Ok(());
    }

    let style = if args.compact {
        OutputStyle::Compact
    } else {
        OutputStyle::Pretty
    };
    let mut remapper = Remapper::new().with_style(style);
    let mut output = remapper
        .transform_coverage_bytes(&input)
        .context("failed to remap coverage")?;
    output.push(b'\n');

    write_output(args.output.as_deref(), &output)
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, output: &[u8]) -> Result<()> {
    match path {
        Some(path) => fs::write(path, output).with_context(|| format!("writing {}", path.display())),
        None => io::stdout()
            .lock()
            .write_all(output)
            .context("writing stdout"),
    }
}
