//! Error types for the body codecs.

use thiserror::Error;

/// Errors that can occur while framing or unframing a message body.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The stream ended where a chunk-size line was expected.
    #[error("Missing chunk size line")]
    MissingChunkSize,

    /// The chunk-size line does not start with a hexadecimal length.
    #[error("Invalid chunk size: {0:?}")]
    InvalidChunkSize(String),

    /// A line exceeded the maximum accepted length.
    #[error("Line longer than {0} bytes")]
    LineTooLong(usize),

    /// The stream ended before the declared number of bytes was transferred.
    #[error("Unexpected end of stream ({remaining} bytes outstanding)")]
    UnexpectedEof { remaining: u64 },

    /// I/O error on either side of the transfer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
