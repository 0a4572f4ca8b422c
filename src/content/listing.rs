//! HTML directory listings.

use std::fmt::Write;

use crate::content::date::http_date;
use crate::content::store::Entry;

/// Marker that opens the listing table; present in every listing.
pub const LISTING_HEADER: &str = "<table>";

/// Marker that closes the listing; present in every listing.
pub const LISTING_FOOTER: &str = "<tr><td colspan=\"5\"><hr></td></tr>";

/// Render the listing page for the directory at request path `path`.
///
/// `parent` adds a "Parent Directory" row pointing at `..`, dated and sized
/// by the given entry.
pub fn render(path: &str, entries: &[Entry], parent: Option<&Entry>) -> String {
    let title = escape(path);
    let mut html = String::with_capacity(512 + entries.len() * 160);

    // fmt::Write into a String cannot fail
    let _ = write!(
        html,
        "<html>\n<head>\n  <title>{title}</title>\n</head>\n<body>\n  <h1>{title}</h1>\n  {LISTING_HEADER}\n  <tr>\n    <th valign=\"top\"></th>\n    <th>Name</th>\n    <th>Last modified</th>\n    <th>Size</th>\n    <th>Description</th>\n  </tr>\n  <tr>\n    <td colspan=\"5\"><hr></td>\n  </tr>\n"
    );

    if let Some(parent) = parent {
        let _ = write!(
            html,
            "  <tr>\n    <td>&#x23ce;</td>\n    <td><a href=\"..\">Parent Directory</a></td>\n    <td align=\"right\">{}</td>\n    <td align=\"right\">{}</td>\n    <td></td>\n  </tr>\n",
            http_date(parent.modified),
            parent.size
        );
    }

    for entry in entries {
        let suffix = if entry.is_dir { "/" } else { "" };
        let href = encode_segment(&entry.name);
        let name = escape(&entry.name);
        let _ = write!(
            html,
            "  <tr>\n    <td></td>\n    <td><a href=\"{href}{suffix}\">{name}{suffix}</a></td>\n    <td align=\"right\">{}</td>\n    <td align=\"right\">{}</td>\n    <td></td>\n  </tr>\n",
            http_date(entry.modified),
            entry.size
        );
    }

    let _ = write!(html, "  {LISTING_FOOTER}\n  </table>\n</body>\n</html>\n");
    html
}

/// Percent-encode a file name as one relative path segment.
///
/// `+` and `&` are encoded too, since request targets decode `+` to a space
/// and split the query at `&`.
fn encode_segment(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for &b in name.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'!' | b'$' | b'\'' | b'('
            | b')' | b'*' | b',' | b':' | b'@' | b'=' => out.push(b as char),
            b => {
                let _ = write!(out, "%{b:02X}");
            }
        }
    }
    out
}

/// Escape text for use in HTML content and double-quoted attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
