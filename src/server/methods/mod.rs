//! Method handlers.
//!
//! Each handler is an `impl` block on [`Dispatcher`] and returns either the
//! response to send or the error whose status page should be sent instead.

mod delete;
mod get;
mod post;
mod put;

pub(crate) use post::upload_extension;

use std::io::{BufRead, Write};

use crate::codec::{chunked, copy_exact};
use crate::content::ContentStore;
use crate::parser::{HttpRequest, Method};
use crate::server::dispatch::Dispatcher;
use crate::server::error::Error;

/// How a request body is delimited on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Framing {
    Length(u64),
    Chunked,
}

impl<S: ContentStore> Dispatcher<S> {
    /// Determine the framing of a request body.
    ///
    /// `Transfer-Encoding` wins over `Content-Length`; only `chunked` is
    /// accepted.
    pub(crate) fn request_framing(&self, request: &HttpRequest, method: Method) -> Result<Framing, Error> {
        match (request.get_header("Transfer-Encoding"), request.get_header("Content-Length")) {
            (None, None) => Err(Error::LengthRequired(method)),
            (Some(_), _) if request.is_chunked() => Ok(Framing::Chunked),
            (Some(_), _) => Err(Error::MethodNotAllowed(method, request.path.clone())),
            (None, Some(len)) => len
                .trim()
                .parse::<u64>()
                .map(Framing::Length)
                .map_err(|_| Error::InvalidContentLength(len.to_string())),
        }
    }

    /// Copy the request body into `sink`.
    pub(crate) fn receive_body<R, W>(&self, body: &mut R, sink: &mut W, framing: Framing) -> Result<u64, Error>
    where
        R: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        let received = match framing {
            Framing::Length(len) => copy_exact(body, sink, len)?,
            Framing::Chunked => chunked::decode(body, sink)?,
        };
        sink.flush()?;
        Ok(received)
    }
}
