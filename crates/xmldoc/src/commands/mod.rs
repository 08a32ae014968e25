//! CLI command implementations.

pub(crate) mod batch;
pub(crate) mod parse;

pub(crate) use batch::BatchArgs;
pub(crate) use parse::ParseArgs;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use xmldoc_config::{CliSettings, Config};

use crate::error::CliError;

/// Arguments shared by all commands.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover xmldoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output (overrides config).
    #[arg(long)]
    pretty: bool,
}

impl CommonArgs {
    /// Load configuration, letting command-line flags win.
    pub(crate) fn load_config(&self, fail_fast: Option<bool>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            pretty: self.pretty.then_some(true),
            fail_fast,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Read a whole input file, or stdin when `path` is absent or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
