//! Error types for PHP literal emission.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for yaml2php-emit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during conversion.
///
/// Any failure anywhere in the include chain aborts the entire conversion;
/// there is no partial output.
#[derive(Debug, Error)]
pub enum Error {
    /// A YAML file could not be read.
    #[error("failed to read YAML file {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A YAML file was read but rejected by the parser.
    #[error("failed to parse YAML file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: yaml2php_ast::Error,
    },

    /// String input was rejected by the parser.
    #[error("failed to parse YAML input: {0}")]
    ParseInput(#[from] yaml2php_ast::Error),

    /// An include chain revisited a file that is still being rendered.
    #[error("include cycle detected at {} ({chain})", path.display())]
    IncludeCycle { path: PathBuf, chain: String },

    /// An include was encountered while converting string input with no
    /// base directory configured.
    #[error("cannot resolve include {path:?}: no base directory for string input")]
    NoIncludeBase { path: String },
}
