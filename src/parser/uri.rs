//! Request-target handling: query splitting and percent-decoding.

use log::warn;

use crate::headers::HeaderStore;
use crate::parser::error::Error;

/// Split a raw request target at the first `?` or `&` into path and query.
pub fn split_target(target: &str) -> (&str, Option<&str>) {
    match target.find(['?', '&']) {
        Some(pos) => (&target[..pos], Some(&target[pos + 1..])),
        None => (target, None),
    }
}

/// Decode `%XX` escapes and `+` (space) in a URI component.
///
/// # Errors
///
/// [`Error::InvalidEscape`] when a `%` is not followed by two hexadecimal
/// digits, or when the decoded bytes are not valid UTF-8.
/// [`Error::ControlCharacter`] when a decoded byte is an ASCII control
/// character such as CR or LF.
pub fn unescape_uri(escaped: &str) -> Result<String, Error> {
    let bytes = escaped.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hi = bytes.get(i + 1).and_then(|&b| hex_value(b));
                let lo = bytes.get(i + 2).and_then(|&b| hex_value(b));
                match (hi, lo) {
                    (Some(hi), Some(lo)) => decoded.push(hi << 4 | lo),
                    _ => return Err(Error::InvalidEscape(escaped.to_string())),
                }
                i += 3;
            }
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b => {
                decoded.push(b);
                i += 1;
            }
        }
    }

    if decoded.iter().any(u8::is_ascii_control) {
        return Err(Error::ControlCharacter(escaped.to_string()));
    }

    String::from_utf8(decoded).map_err(|_| Error::InvalidEscape(escaped.to_string()))
}

/// Decode a query string such as `a=b&c=d;e` into ordered name/value pairs.
///
/// Pairs are separated by `&` or `;`. A pair without `=` gets an empty value.
/// Names and values are unescaped; a component with a bad escape is kept
/// verbatim.
pub fn decode_query(query: &str) -> HeaderStore {
    let mut params = HeaderStore::new();

    for pair in query.split(['&', ';']).filter(|s| !s.is_empty()) {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        let name = unescape_uri(name).unwrap_or_else(|_| name.to_string());
        let value = unescape_uri(value).unwrap_or_else(|_| value.to_string());

        if let Err(e) = params.put(name, value) {
            warn!("Dropping query parameters: {e}");
            break;
        }
    }

    params
}

fn hex_value(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}
