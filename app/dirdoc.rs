//! Command-line interface for dirdoc.
//!
//! Walks a directory and writes a Markdown (or JSON) snapshot of its tree and
//! text files. Per-file problems are logged to stderr; only failing to read the
//! root or to create the output ends the run with a non-zero status.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dirdoc::{BinaryDetection, DEFAULT_OUTPUT, OutputFormat, SnapshotBuilder, SnapshotOptions};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::exit;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// dirdoc — snapshot a directory tree into one Markdown document
#[derive(Parser)]
#[command(name = "dirdoc", version, about, long_about = None)]
struct Cli {
    /// Root directory to document
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Directory name to skip at every level (can be repeated)
    #[arg(long = "ignore-dir", value_name = "NAME")]
    ignore_dirs: Vec<String>,

    /// File name to skip at every level (can be repeated)
    #[arg(long = "ignore-file", value_name = "NAME")]
    ignore_files: Vec<String>,

    /// Output file, or `-` for stdout
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Do not skip .git, .venv, node_modules and __pycache__
    #[arg(long)]
    no_default_ignores: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    /// How to recognise files that are not text
    #[arg(long, value_enum, default_value_t = Detection::Utf8)]
    binary_detection: Detection,

    /// Descend into symlinked directories
    #[arg(long)]
    follow_links: bool,

    /// Log progress at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Detection {
    Utf8,
    Simple,
    Accurate,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Markdown => OutputFormat::Markdown,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl From<Detection> for BinaryDetection {
    fn from(detection: Detection) -> Self {
        match detection {
            Detection::Utf8 => BinaryDetection::Utf8,
            Detection::Simple => BinaryDetection::Simple,
            Detection::Accurate => BinaryDetection::Accurate,
        }
    }
}

impl Cli {
    fn to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }

    fn into_options(self) -> (SnapshotOptions, OutputFormat, bool) {
        let to_stdout = self.to_stdout();
        let mut builder = SnapshotBuilder::new(self.root);
        if self.no_default_ignores {
            builder = builder.no_default_ignores();
        }
        if !to_stdout {
            builder = builder.output(self.output);
        }
        let options = builder
            .ignore_dirs(self.ignore_dirs)
            .ignore_files(self.ignore_files)
            .binary_detection(self.binary_detection.into())
            .follow_links(self.follow_links)
            .build();
        (options, self.format.into(), to_stdout)
    }
}

// --verbose wins over RUST_LOG; without either, only warnings are shown.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(Level::DEBUG.as_str())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::WARN.as_str()))
    };
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .with(filter)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let (options, format, to_stdout) = cli.into_options();

    if let Err(e) = run(&options, format, to_stdout) {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}

fn run(options: &SnapshotOptions, format: OutputFormat, to_stdout: bool) -> Result<()> {
    tracing::debug!("Documenting {}", options.root.display());
    let written = if to_stdout {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let written = dirdoc::write_document(options, format, &mut handle)
            .context("Failed to write snapshot to stdout")?;
        handle.flush().context("Failed to flush stdout")?;
        written
    } else {
        dirdoc::write_document_to_file(options, format)
            .with_context(|| format!("Failed to write {}", options.output.display()))?
    };
    tracing::debug!("Documented {} files", written);
    Ok(())
}
