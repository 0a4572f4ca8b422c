//! HTTP request head parsing and representation.

use std::io::BufRead;
use std::str::FromStr;

use log::warn;

use crate::codec::{read_line, MAX_LINE_LENGTH};
use crate::headers::HeaderStore;
use crate::parser::error::Error;
use crate::parser::method::Method;
use crate::parser::uri::{decode_query, split_target, unescape_uri};

/// Maximum number of header fields kept for one request.
pub const MAX_REQUEST_HEADERS: usize = 100;

/// Name of the synthetic header that carries the raw query string.
pub const QUERY_KEY: &str = "?";

/// Represents the head of an HTTP request.
///
/// The body, if any, is still unread on the connection.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The method token as sent by the client
    pub method: String,
    /// The raw request target
    pub target: String,
    /// The unescaped path component of the target
    pub path: String,
    /// The protocol version token
    pub version: String,
    /// The request headers, plus the query string under [`QUERY_KEY`]
    pub headers: HeaderStore,
}

impl HttpRequest {
    /// Parse the method token.
    ///
    /// # Returns
    ///
    /// The method, or [`Error::UnsupportedMethod`] for tokens this server
    /// does not implement
    pub fn parse_method(&self) -> Result<Method, Error> {
        Method::from_str(&self.method)
    }

    /// Get a header value (case-insensitive).
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.value(name)
    }

    /// Check if a header exists.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains(name)
    }

    /// Whether the request declares `Transfer-Encoding: chunked`.
    pub fn is_chunked(&self) -> bool {
        self.get_header("Transfer-Encoding")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("chunked"))
    }

    /// The raw query string, if the target had one.
    pub fn query(&self) -> Option<&str> {
        self.get_header(QUERY_KEY)
    }

    /// The decoded query parameters, in order.
    pub fn query_params(&self) -> HeaderStore {
        self.query().map(decode_query).unwrap_or_default()
    }

    /// The request line as received.
    pub fn request_line(&self) -> String {
        format!("{} {} {}", self.method, self.target, self.version)
    }
}

/// Read a request line and header block from `reader`.
///
/// # Arguments
///
/// * `reader` - The buffered input side of the connection
///
/// # Returns
///
/// The parsed request head, or an error if the request line or target is
/// malformed. The reader is left positioned at the first body byte.
pub fn read_request<R: BufRead + ?Sized>(reader: &mut R) -> Result<HttpRequest, Error> {
    // Parse the request line
    let line = read_line(reader, MAX_LINE_LENGTH)?.ok_or(Error::EmptyRequest)?;
    let line = String::from_utf8_lossy(&line);

    let parts: Vec<&str> = line.split_whitespace().collect();
    let [method, target, version] = parts[..] else {
        return Err(Error::MalformedRequestLine(line.to_string()));
    };

    // Parse the headers
    let mut headers = HeaderStore::with_limit(MAX_REQUEST_HEADERS);
    read_headers(reader, &mut headers)?;

    // Keep the query string as a pseudo-header
    let (path, query) = split_target(target);
    if let Some(query) = query {
        if let Err(e) = headers.put(QUERY_KEY, query) {
            warn!("Request headers full, dropping query string: {e}");
        }
    }

    let path = unescape_uri(path)?;

    Ok(HttpRequest {
        method: method.to_string(),
        target: target.to_string(),
        path,
        version: version.to_string(),
        headers,
    })
}

/// Read header lines up to and including the blank line.
///
/// Lines without a `:` are skipped. Once the store is full the remaining
/// lines are consumed and dropped.
fn read_headers<R: BufRead + ?Sized>(reader: &mut R, headers: &mut HeaderStore) -> Result<(), Error> {
    let mut full = false;

    while let Some(line) = read_line(reader, MAX_LINE_LENGTH)? {
        // Empty line indicates the end of headers
        if line.is_empty() {
            break;
        }
        if full {
            continue;
        }

        let line = String::from_utf8_lossy(&line);
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };

        if let Err(e) = headers.put(name, value.trim_start_matches(' ')) {
            warn!("Request headers full, dropping remaining header lines: {e}");
            full = true;
        }
    }

    Ok(())
}
