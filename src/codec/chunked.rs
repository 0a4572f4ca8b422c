//! HTTP/1.1 chunked transfer-encoding.
//!
//! Wire format of one frame:
//!
//! ```text
//! <hex-length>[;extension...]\r\n
//! <hex-length bytes of payload>\r\n
//! ```
//!
//! A frame with length zero ends the body. Trailer fields after the final
//! frame are not supported.

use std::io::{BufRead, Read, Write};

use crate::codec::{copy_exact, read_line, CodecError, MAX_LINE_LENGTH};

/// Payload size of each frame written by [`encode`].
pub const CHUNK_SIZE: u64 = 4096;

/// Decode a chunked body from `reader` into `writer`.
///
/// Returns the number of payload bytes written.
pub fn decode<R, W>(reader: &mut R, writer: &mut W) -> Result<u64, CodecError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut total = 0u64;

    loop {
        let line = read_line(reader, MAX_LINE_LENGTH)?.ok_or(CodecError::MissingChunkSize)?;
        let len = parse_chunk_size(&line)?;

        copy_exact(reader, writer, len)?;
        total += len;

        // CRLF after the payload (or the empty line after the last frame)
        if read_line(reader, MAX_LINE_LENGTH)?.is_none() {
            return Err(CodecError::UnexpectedEof { remaining: 0 });
        }

        if len == 0 {
            return Ok(total);
        }
    }
}

/// Encode `len` bytes from `reader` as a chunked body on `writer`.
pub fn encode<R, W>(reader: &mut R, writer: &mut W, len: u64) -> Result<(), CodecError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut remaining = len;
    while remaining > 0 {
        let n = remaining.min(CHUNK_SIZE);
        write!(writer, "{n:x}\r\n")?;
        copy_exact(reader, writer, n)?;
        writer.write_all(b"\r\n")?;
        remaining -= n;
    }

    writer.write_all(b"0\r\n\r\n")?;
    Ok(())
}

/// Parse the length token of a chunk-size line, ignoring extensions.
fn parse_chunk_size(line: &[u8]) -> Result<u64, CodecError> {
    let token = line.split(|&b| b == b';').next().unwrap_or_default();
    let token = String::from_utf8_lossy(token);
    let token = token.trim();

    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::InvalidChunkSize(token.to_string()));
    }

    u64::from_str_radix(token, 16).map_err(|_| CodecError::InvalidChunkSize(token.to_string()))
}
