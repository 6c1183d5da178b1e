//! CLI failures.

use std::io;
use std::path::PathBuf;

use qarg_diagnostic::ApplyError;
use qarg_ir::ParseError;

/// Error from a CLI command. The binary prints it and exits with status 1.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid render request: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Apply(#[from] ApplyError),
    /// A flag was not recognized or had an invalid value.
    #[error("{0}")]
    Usage(String),
}
