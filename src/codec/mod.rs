//! Body framing over blocking byte streams.
//!
//! This module holds the pieces shared by the request parser and the response
//! writer: bounded line reads, exact-length copies, and the HTTP/1.1 chunked
//! transfer-encoding codec.

pub mod chunked;
mod error;

use std::io::{self, BufRead, Read, Write};

pub use error::CodecError;

/// Longest line (request line, header line or chunk-size line) accepted,
/// excluding the line terminator.
pub const MAX_LINE_LENGTH: usize = 8192;

/// Size of the buffer used for fixed-length body copies.
pub const COPY_BUFFER_SIZE: usize = 8192;

/// Read one line, without its `\n` or `\r\n` terminator.
///
/// Returns `Ok(None)` at end of stream. A final line without a terminator is
/// returned as-is.
pub fn read_line<R: BufRead + ?Sized>(reader: &mut R, limit: usize) -> Result<Option<Vec<u8>>, CodecError> {
    let mut line = Vec::new();
    // One extra byte for the newline itself.
    let max = (limit as u64).saturating_add(2);
    let n = reader.take(max).read_until(b'\n', &mut line)?;
    if n == 0 {
        return Ok(None);
    }

    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    } else if line.last() == Some(&b'\r') {
        line.pop();
    }

    if line.len() > limit {
        return Err(CodecError::LineTooLong(limit));
    }
    Ok(Some(line))
}

/// Copy exactly `len` bytes from `reader` to `writer` through a fixed buffer.
pub fn copy_exact<R, W>(reader: &mut R, writer: &mut W, len: u64) -> Result<u64, CodecError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = vec![0u8; COPY_BUFFER_SIZE];
    let mut remaining = len;

    while remaining > 0 {
        let want = remaining.min(buf.len() as u64) as usize;
        let n = match reader.read(&mut buf[..want]) {
            Ok(0) => return Err(CodecError::UnexpectedEof { remaining }),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        writer.write_all(&buf[..n])?;
        remaining -= n as u64;
    }

    Ok(len)
}
