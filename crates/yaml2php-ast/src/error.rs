//! Error types for YAML document loading.

use thiserror::Error;

/// Result type alias for yaml2php-ast operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a YAML document.
#[derive(Debug, Error)]
pub enum Error {
    /// The scanner rejected the text as malformed YAML.
    #[error("YAML syntax error: {0}")]
    Scan(#[from] yaml_rust2::ScanError),

    /// Well-formed YAML that this tool cannot represent.
    #[error("invalid YAML structure: {0}")]
    InvalidStructure(String),
}
