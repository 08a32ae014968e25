//! xmldoc CLI - renders XML documentation comments as plain-text JSON records.
//!
//! Provides commands for:
//! - `parse`: Parse a single documentation comment
//! - `batch`: Parse a JSON map of declaration ids to documentation comments

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BatchArgs, ParseArgs};
use output::Output;

/// xmldoc - Documentation comment renderer.
#[derive(Parser)]
#[command(name = "xmldoc", version, about)]
struct Cli {
    /// Enable info-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one documentation comment and print it as JSON.
    Parse(ParseArgs),
    /// Parse a JSON object of documentation comments keyed by declaration id.
    Batch(BatchArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, env_directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Parse(args) => args.execute(),
        Commands::Batch(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// `--verbose` enables INFO level, otherwise use `RUST_LOG` or default to WARN.
fn log_filter(verbose: bool, env_directives: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("info");
    }
    env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}
