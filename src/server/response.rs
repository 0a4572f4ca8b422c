//! HTTP response types and utilities.

use std::fmt;
use std::io::{Cursor, Read};

use log::warn;

use crate::headers::HeaderStore;

/// HTTP status codes with their standard reason phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    Created = 201,
    BadRequest = 400,
    NotFound = 404,
    MethodNotAllowed = 405,
    LengthRequired = 411,
    NotImplemented = 501,
}

impl StatusCode {
    /// The numeric status code.
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::LengthRequired => "Length Required",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason_phrase())
    }
}

/// The body of a response, streamed after the header block.
pub enum Body {
    /// No body follows the headers.
    Empty,
    /// Exactly `len` bytes copied from `source`.
    Sized { source: Box<dyn Read>, len: u64 },
    /// `len` bytes from `source`, sent with chunked transfer-encoding.
    Chunked { source: Box<dyn Read>, len: u64 },
}

impl Body {
    /// Number of payload bytes this body carries.
    pub fn len(&self) -> u64 {
        match self {
            Body::Empty => 0,
            Body::Sized { len, .. } | Body::Chunked { len, .. } => *len,
        }
    }

    /// Whether the body carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Empty => f.write_str("Empty"),
            Body::Sized { len, .. } => f.debug_struct("Sized").field("len", len).finish(),
            Body::Chunked { len, .. } => f.debug_struct("Chunked").field("len", len).finish(),
        }
    }
}

/// Represents an HTTP response.
#[derive(Debug)]
pub struct HttpResponse {
    /// The HTTP status code
    pub status: StatusCode,
    /// The HTTP headers, written in insertion order
    pub headers: HeaderStore,
    /// The response body
    pub body: Body,
}

impl HttpResponse {
    /// Create a new HTTP response with the given status code and no headers.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderStore::new(),
            body: Body::Empty,
        }
    }

    /// Append a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.add_header(name, value);
        self
    }

    /// Append a header in place.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl ToString) {
        if let Err(e) = self.headers.put(name, value.to_string()) {
            warn!("Dropping response header: {e}");
        }
    }

    /// Set the content type.
    pub fn with_content_type(self, content_type: impl ToString) -> Self {
        self.with_header("Content-type", content_type)
    }

    /// Set an in-memory body and its `Content-Length`.
    pub fn with_body_bytes(mut self, body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        let len = body.len() as u64;
        self.body = Body::Sized {
            source: Box::new(Cursor::new(body)),
            len,
        };
        self.with_header("Content-Length", len)
    }

    /// Stream `len` bytes from `source` with a `Content-Length` header.
    pub fn with_sized_body(mut self, source: impl Read + 'static, len: u64) -> Self {
        self.body = Body::Sized {
            source: Box::new(source),
            len,
        };
        self.with_header("Content-Length", len)
    }

    /// Stream `len` bytes from `source` with chunked transfer-encoding.
    pub fn with_chunked_body(mut self, source: impl Read + 'static, len: u64) -> Self {
        self.body = Body::Chunked {
            source: Box::new(source),
            len,
        };
        self.with_header("Transfer-Encoding", "chunked")
    }

    /// The HTML page sent for statuses that have no other content.
    pub fn status_page(status: StatusCode) -> String {
        format!("<html><head><title>{status}</title></head><body>{status}</body></html>")
    }

    /// Attach the status page for this response's status as an HTML body.
    pub fn with_status_page(self) -> Self {
        let page = Self::status_page(self.status);
        self.with_content_type("text/html").with_body_bytes(page)
    }
}
