//! Error types for the HTTP parser.

use thiserror::Error;

use crate::codec::CodecError;

/// Errors that can occur during HTTP request parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// The method token is not one this server implements.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The request line does not consist of exactly three tokens.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The request target contains an invalid `%` escape.
    #[error("Invalid URI escape in: {0}")]
    InvalidEscape(String),

    /// The decoded request target contains a control character.
    #[error("Control character in URI: {0}")]
    ControlCharacter(String),

    /// A request line or header line exceeded the maximum length.
    #[error("Line longer than {0} bytes")]
    LineTooLong(usize),

    /// The connection closed before a request line was received.
    #[error("Empty request")]
    EmptyRequest,

    /// I/O error while reading the request head.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CodecError> for Error {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::LineTooLong(limit) => Error::LineTooLong(limit),
            CodecError::Io(e) => Error::Io(e),
            other => Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, other)),
        }
    }
}
