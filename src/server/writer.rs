//! Serializes a response onto the connection.

use std::io::Write;

use log::debug;

use crate::codec::{chunked, copy_exact};
use crate::server::error::Error;
use crate::server::response::{Body, HttpResponse};

/// Write `response` to `out`.
///
/// The status line and header block are formatted into one buffer and
/// written with a single `write_all`. The body follows only when
/// `send_body` is set; HEAD responses pass `false`.
///
/// # Arguments
///
/// * `out` - The output side of the connection
/// * `protocol` - Protocol token for the status line, e.g. `HTTP/1.1`
/// * `response` - The response to send
/// * `send_body` - Whether to stream the body after the headers
pub fn write_response<W: Write + ?Sized>(
    out: &mut W,
    protocol: &str,
    response: HttpResponse,
    send_body: bool,
) -> Result<(), Error> {
    let HttpResponse { status, headers, body } = response;

    let mut head = Vec::with_capacity(256);
    write!(head, "{protocol} {} {}\r\n", status.code(), status.reason_phrase())?;
    for field in headers.iter() {
        write!(head, "{}: {}\r\n", field.name, field.value)?;
    }
    head.extend_from_slice(b"\r\n");

    debug!("{protocol} {status}");
    for field in headers.iter() {
        debug!("  {}: {}", field.name, field.value);
    }

    out.write_all(&head)?;

    if send_body {
        match body {
            Body::Empty => {}
            Body::Sized { mut source, len } => {
                copy_exact(&mut source, out, len)?;
            }
            Body::Chunked { mut source, len } => {
                chunked::encode(&mut source, out, len)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
