//! CLI tool that writes an annotated token listing for a source file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use minilex::Options;

#[derive(Parser)]
#[command(name = "minilex", version, about = "Tokenize a source file and dump its symbol tables")]
struct Cli {
    /// Source file to tokenize
    input: PathBuf,

    /// File the listing is appended to
    output: PathBuf,

    /// Truncate the output file instead of appending
    #[arg(long)]
    truncate: bool,

    /// Scan the source as-is instead of lower-casing it first
    #[arg(long)]
    keep_case: bool,

    /// Log scanner activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("minilex={level},warn")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = Options {
        fold_case: !cli.keep_case,
        truncate: cli.truncate,
    };

    match minilex::driver::run(&cli.input, &cli.output, &options) {
        Ok(summary) => {
            tracing::info!(
                tokens = summary.tokens,
                errors = summary.errors,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
