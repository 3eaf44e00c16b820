//! Command-line interface for tree2cmd.
//!
//! Reads a tree diagram from a file or stdin and prints the shell commands
//! that recreate it.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::exit;
use tree2cmd::{ConversionResult, ConvertBuilder, ConvertOptions, InputSource, convert, output};

/// tree2cmd — turn a tree diagram into mkdir/touch commands
#[derive(Parser)]
#[command(name = "tree2cmd", version, about, long_about = None)]
struct Cli {
    /// Tree diagram file (stdin if omitted or `-`)
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Commands)]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,

    /// Verbose logging (requires the `logging` feature)
    #[arg(short, long)]
    #[cfg_attr(not(feature = "logging"), allow(dead_code))]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Commands,
    Markdown,
    Json,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Commands => output::OutputFormat::Commands,
            OutputFormat::Markdown => output::OutputFormat::Markdown,
            OutputFormat::Json => output::OutputFormat::Json,
        }
    }
}

impl Cli {
    fn into_options(self) -> (ConvertOptions, OutputFormat, Option<PathBuf>, bool) {
        let options = ConvertBuilder::new()
            .input(InputSource::from_arg(self.input))
            .build();
        (options, self.format, self.output, self.pretty)
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    init_logging(cli.verbose);

    let (options, format, output_path, pretty) = cli.into_options();

    match convert(options) {
        Ok(result) => output_result(&result, format, output_path, pretty),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn output_result(
    result: &ConversionResult,
    format: OutputFormat,
    output_path: Option<PathBuf>,
    pretty: bool,
) {
    let written = match output_path {
        Some(path) => output::write_result_to_file(result, format.into(), path, pretty),
        None => output::format_result(result, format.into(), pretty).map(|out| print!("{}", out)),
    };
    if let Err(e) = written {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
