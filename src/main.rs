use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use convert::TableConverter;
use data::{OutputTarget, TableConfig, DEFAULT_SEPARATOR};

pub mod convert;
pub mod data;
pub mod error;
pub mod prompt;

#[derive(Parser)]
#[command(name = "csv2tex", version, about = "Convert a CSV table into a LaTeX table")]
struct Cli {
    #[arg(value_name = "CSV_FILE", help = "The table to convert")]
    csv_file: PathBuf,

    #[arg(
        long = "separator",
        short = 's',
        default_value = DEFAULT_SEPARATOR,
        help = "Column separator, interpreted as a regular expression"
    )]
    separator: String,

    #[arg(
        long = "delimiter",
        short = 'd',
        default_value = "",
        help = "String delimiter stripped from quoted fields. Disabled by default"
    )]
    delimiter: String,

    #[arg(
        long = "output",
        short = 'o',
        help = "Output file. The LaTeX table is written to stdout when omitted"
    )]
    output: Option<PathBuf>,

    #[arg(long = "verbose", short = 'v', help = "Enable verbose mode")]
    verbose: bool,
}

pub fn main() {
    // Reset SIGPIPE to default so writing to a broken pipe exits cleanly
    // instead of panicking.
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    let cli = Cli::try_parse().unwrap_or_else(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => {
            eprint!("{err}");
            eprintln!("See 'csv2tex -h' for further details !");
            std::process::exit(1);
        }
    });

    init_logging(cli.verbose);

    if let Err(err) = run(cli, io::stdin().lock(), io::stdout()) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "csv2tex=debug" } else { "csv2tex=info" };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    debug!("Verbose mode enabled");
}

/// Returns `false` when the user declined to overwrite the output file.
fn run<R: BufRead, W: Write>(cli: Cli, answers: R, console: W) -> Result<bool> {
    let csv_file = cli.csv_file;
    let output = match cli.output {
        Some(path) => OutputTarget::File(path),
        None => OutputTarget::Stdout,
    };

    let config = TableConfig::new(&cli.separator, &cli.delimiter, output)?;

    if let OutputTarget::File(path) = &config.output {
        if !prompt::confirm_overwrite(path, answers, console)? {
            info!("Leaving {} untouched", path.display());
            return Ok(false);
        }
    }

    let rows = TableConverter::new(&config)
        .convert_file(&csv_file)
        .with_context(|| format!("failed to convert {}", csv_file.display()))?;

    info!(
        "The CSV has been successfully converted to LaTeX ! ({} rows written to {})",
        rows, config.output
    );

    Ok(true)
}
