//! HTTP request methods.

use std::fmt;
use std::str::FromStr;

use crate::parser::error::Error;

/// The request methods this server dispatches.
///
/// Any other token is answered with 501 Not Implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read a file or directory listing.
    GET,
    /// Like GET, but only the status line and headers are sent.
    HEAD,
    /// Create or replace a file with the request body.
    PUT,
    /// Store the request body as a new file inside a directory.
    POST,
    /// Remove a file or an empty directory.
    DELETE,
}

// Method tokens are matched case-insensitively
impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::GET),
            "HEAD" => Ok(Method::HEAD),
            "PUT" => Ok(Method::PUT),
            "POST" => Ok(Method::POST),
            "DELETE" => Ok(Method::DELETE),
            _ => Err(Error::UnsupportedMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
