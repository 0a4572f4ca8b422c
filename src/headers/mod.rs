//! Ordered header storage.
//!
//! Request headers, response headers and configuration properties all share the
//! same container: an insertion-ordered list of name/value pairs with
//! case-insensitive name lookup. Duplicate names are kept, so repeated headers
//! survive in the order they arrived.

mod error;
mod list;
mod store;
mod tests;

pub use error::{CapacityError, HeaderError};
pub use list::FieldList;
pub use store::{HeaderField, HeaderStore};
