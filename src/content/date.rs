//! RFC 1123 date formatting for `Date` and `Last-Modified` headers.

use std::time::SystemTime;

/// Format a timestamp as an RFC 1123 date, e.g. `Sat, 13 Apr 2019 19:03:32 GMT`.
pub fn http_date(time: SystemTime) -> String {
    httpdate::fmt_http_date(time)
}

/// The current time as an RFC 1123 date.
pub fn now() -> String {
    http_date(SystemTime::now())
}
