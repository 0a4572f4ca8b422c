//! Error types for the HTTP server.

use thiserror::Error;

use crate::codec::CodecError;
use crate::parser::{Error as ParserError, Method};
use crate::server::response::StatusCode;

/// Errors that can occur while serving a connection.
#[derive(Debug, Error)]
pub enum Error {
    /// The request head could not be parsed.
    #[error("Bad request: {0}")]
    BadRequest(#[from] ParserError),

    /// The request declared a `Content-Length` that is not a number.
    #[error("Invalid Content-Length: {0}")]
    InvalidContentLength(String),

    /// A body-carrying request declared neither a length nor chunked encoding.
    #[error("Length required for {0}")]
    LengthRequired(Method),

    /// Requested resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Method not allowed for the requested resource.
    #[error("Method {0} not allowed for path: {1}")]
    MethodNotAllowed(Method, String),

    /// The method token is not implemented.
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// The request body framing was broken.
    #[error("Body framing error: {0}")]
    Codec(#[from] CodecError),

    /// I/O error on the connection.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The worker pool no longer accepts jobs.
    #[error("Worker pool is shut down")]
    PoolClosed,
}

impl Error {
    /// The status page to answer this error with.
    ///
    /// `None` when no response can or should be sent: the client went away
    /// before sending anything, or the connection itself failed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::BadRequest(ParserError::EmptyRequest | ParserError::Io(_)) => None,
            Error::BadRequest(ParserError::UnsupportedMethod(_)) => Some(StatusCode::NotImplemented),
            Error::BadRequest(_) | Error::InvalidContentLength(_) => Some(StatusCode::BadRequest),
            Error::LengthRequired(_) => Some(StatusCode::LengthRequired),
            Error::NotFound(_) => Some(StatusCode::NotFound),
            Error::MethodNotAllowed(..) => Some(StatusCode::MethodNotAllowed),
            Error::NotImplemented(_) => Some(StatusCode::NotImplemented),
            Error::Codec(_) | Error::Io(_) | Error::PoolClosed => None,
        }
    }
}
