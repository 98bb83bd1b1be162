//! Error types for unprose library.

use std::io;
use thiserror::Error;

/// Result type alias for unprose operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur outside the (infallible) block pipeline.
///
/// Cleaning, classification and inline formatting never fail; errors only
/// come from reading input, decoding response documents and serializing
/// output.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A recommendation response document could not be decoded.
    #[error("Invalid recommendation response: {0}")]
    InvalidResponse(String),

    /// Error during rendering (JSON, text, HTML).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}
