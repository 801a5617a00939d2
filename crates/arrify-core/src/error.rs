//! Error types for PHP array-literal parsing.

use thiserror::Error;

/// Errors that can occur while decoding PHP array-literal text.
///
/// Rendering has no error path at all: malformed JSON input degrades to the
/// empty `array();` literal instead of failing.
#[derive(Error, Debug)]
pub enum ArrifyError {
    /// The input was not a syntactically valid PHP expression (decoding path).
    /// Includes the byte offset where the error was detected.
    #[error("PHP parse error at offset {offset}: {message}")]
    PhpParse { offset: usize, message: String },

    /// Re-encoding a parsed value as JSON failed.
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout arrify-core.
pub type Result<T> = std::result::Result<T, ArrifyError>;
