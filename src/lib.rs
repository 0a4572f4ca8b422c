//! A multi-threaded HTTP/1.1 origin server for a filesystem resource tree.
//!
//! Each accepted connection carries one request, served by a worker thread
//! against a content root directory, after which the connection is closed.
//!
//! # Features
//!
//! - GET and HEAD for files and HTML directory listings
//! - PUT to create or replace files, POST to store uploads, DELETE to remove
//!   files and empty directories
//! - Chunked transfer-encoding for request and response bodies
//! - Ordered, case-insensitive header storage with duplicate names kept
//! - A fixed pool of worker threads fed from a bounded queue
//! - Properties-file configuration and `mime.types` media type lookup
//!
//! # Examples
//!
//! ## Parsing a request head
//!
//! ```
//! use std::io::Cursor;
//! use fileserv::{read_request, Method};
//!
//! let raw = b"GET /docs/index.html?lang=en HTTP/1.1\r\nHost: example.com\r\n\r\n";
//! let request = read_request(&mut Cursor::new(&raw[..])).unwrap();
//!
//! assert_eq!(request.parse_method().unwrap(), Method::GET);
//! assert_eq!(request.path, "/docs/index.html");
//! assert_eq!(request.get_header("host"), Some("example.com"));
//! assert_eq!(request.query_params().value("lang"), Some("en"));
//! ```
//!
//! ## Running a server
//!
//! ```no_run
//! use fileserv::{HttpServer, ServerConfig};
//!
//! let config = ServerConfig::load("httpd.conf".as_ref())?;
//! let media = config.load_media_types()?;
//! let server = HttpServer::new(config, media)?;
//! server.start()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codec;
pub mod content;
pub mod headers;
pub mod parser;
pub mod server;

#[cfg(test)]
mod test_support;

// Re-export commonly used items for convenience
pub use codec::CodecError;
pub use content::{ContentStore, FsStore, MediaTypes};
pub use headers::HeaderStore;
pub use parser::{read_request, Error as ParserError, HttpRequest, Method};
pub use server::{ConfigError, Dispatcher, Error as ServerError, HttpResponse, HttpServer, ServerConfig, StatusCode};
