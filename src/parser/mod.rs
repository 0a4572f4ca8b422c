//! HTTP request parser module.
//!
//! Reads the request line and the header block from the input side of a
//! connection. The body is left unread on the reader for the method handlers.

mod request;
mod method;
mod uri;
mod error;

// Re-export public items
pub use request::{HttpRequest, MAX_REQUEST_HEADERS, QUERY_KEY};
pub use method::Method;
pub use error::Error;
pub use uri::{decode_query, unescape_uri};

// Re-export the read_request function
pub use request::read_request;
