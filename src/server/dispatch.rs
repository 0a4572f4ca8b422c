//! Per-connection request handling.
//!
//! One connection carries exactly one request: read the head, resolve the
//! target under the content root, run the method handler, write the response,
//! close.

use std::ffi::OsString;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use crate::content::{date, ContentStore, FsStore, MediaTypes, DIRECTORY_MEDIA_TYPE};
use crate::parser::{read_request, Error as ParserError, HttpRequest, Method};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::response::{HttpResponse, StatusCode};
use crate::server::writer::write_response;

/// Serves requests against a resource tree.
///
/// Shared by all workers; holds only immutable state.
pub struct Dispatcher<S: ContentStore = FsStore> {
    pub(crate) config: Arc<ServerConfig>,
    pub(crate) media: Arc<MediaTypes>,
    pub(crate) store: S,
}

impl Dispatcher<FsStore> {
    /// Create a dispatcher over the local filesystem.
    pub fn new(config: Arc<ServerConfig>, media: Arc<MediaTypes>) -> Self {
        Self::with_store(config, media, FsStore::new())
    }
}

impl<S: ContentStore> Dispatcher<S> {
    /// Create a dispatcher over an arbitrary content store.
    pub fn with_store(config: Arc<ServerConfig>, media: Arc<MediaTypes>, store: S) -> Self {
        Self { config, media, store }
    }

    /// The server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Serve the single request carried by `stream`.
    ///
    /// Client errors are answered with a status page and then returned, so
    /// the caller can log them. A connection that closes before sending a
    /// request line gets no response and yields `Ok`. I/O and body framing
    /// failures abort the response.
    pub fn serve<T: Read + Write>(&self, stream: T) -> Result<(), Error> {
        let mut reader = BufReader::new(stream);

        let request = match read_request(&mut reader) {
            Ok(request) => request,
            Err(ParserError::EmptyRequest) => {
                debug!("Connection closed before a request was sent");
                return Ok(());
            }
            Err(e) => {
                let error = Error::from(e);
                if let Some(status) = error.status() {
                    self.write_status_page(reader.get_mut(), status, true)?;
                }
                return Err(error);
            }
        };

        debug!("{}", request.request_line());
        for field in request.headers.iter() {
            debug!("  {}: {}", field.name, field.value);
        }

        let send_body = !request.method.eq_ignore_ascii_case("HEAD");

        match self.dispatch(&request, &mut reader) {
            Ok(response) => write_response(reader.get_mut(), &self.config.protocol, response, send_body),
            Err(error) => match error.status() {
                Some(status) => {
                    self.write_status_page(reader.get_mut(), status, send_body)?;
                    Err(error)
                }
                None => Err(error),
            },
        }
    }

    /// Run the handler for the request's method.
    ///
    /// `body` is positioned at the first byte of the request body.
    pub fn dispatch<R: BufRead>(&self, request: &HttpRequest, body: &mut R) -> Result<HttpResponse, Error> {
        let method = request
            .parse_method()
            .map_err(|_| Error::NotImplemented(request.method.clone()))?;
        let path = self.resolve(&request.path);

        match method {
            Method::GET => self.get(request, &path, true),
            Method::HEAD => self.get(request, &path, false),
            Method::PUT => self.put(request, &path, body),
            Method::POST => self.post(request, &path, body),
            Method::DELETE => self.delete(request, &path),
        }
    }

    /// Map a request path onto the content root.
    ///
    /// The path is appended to the root verbatim. `..` segments are not
    /// normalized, so a request path can name files outside the root.
    pub fn resolve(&self, uri_path: &str) -> PathBuf {
        let mut resolved = OsString::from(self.config.content_root.as_os_str());
        resolved.push(uri_path);
        PathBuf::from(resolved)
    }

    /// A response with the headers every response carries.
    pub fn response(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::new(status)
            .with_header("Server", &self.config.name)
            .with_header("Date", date::now())
    }

    /// A response carrying the HTML status page for `status`.
    pub fn status_page(&self, status: StatusCode) -> HttpResponse {
        self.response(status).with_status_page()
    }

    /// Media type for a request path, with directories served as HTML.
    pub(crate) fn content_type(&self, uri_path: &str) -> &str {
        match self.media.resolve(uri_path) {
            DIRECTORY_MEDIA_TYPE => "text/html",
            media_type => media_type,
        }
    }

    /// Location header value for a resolved path.
    pub(crate) fn location(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    fn write_status_page<W: Write>(&self, out: &mut W, status: StatusCode, send_body: bool) -> Result<(), Error> {
        write_response(out, &self.config.protocol, self.status_page(status), send_body)
    }
}
