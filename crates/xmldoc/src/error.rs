//! CLI error types.

use xmldoc_config::ConfigError;
use xmldoc_core::ParseError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed documentation comment: {0}")]
    Parse(#[from] ParseError),

    #[error("malformed documentation comment `{id}`: {source}")]
    Comment {
        id: String,
        #[source]
        source: ParseError,
    },
}
