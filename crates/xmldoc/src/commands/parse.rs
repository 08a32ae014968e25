//! `xmldoc parse` command implementation.

use std::path::PathBuf;

use clap::Args;

use super::{CommonArgs, read_input};
use crate::error::CliError;
use crate::output::write_json;

/// Arguments for the parse command.
#[derive(Args)]
pub(crate) struct ParseArgs {
    /// File holding one documentation comment (default: stdin).
    file: Option<PathBuf>,

    #[command(flatten)]
    common: CommonArgs,
}

impl ParseArgs {
    /// Execute the parse command.
    ///
    /// Prints the parsed record as JSON, or `null` when the input holds no
    /// documentation.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.common.load_config(None)?;
        let input = read_input(self.file.as_deref())?;

        let doc = xmldoc_core::parse(input.as_str())?;
        if doc.is_none() {
            tracing::info!("Input holds no documentation");
        }

        write_json(std::io::stdout().lock(), &doc, &config.output)
    }
}
