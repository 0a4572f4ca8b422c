//! Filesystem-facing collaborators of the request pipeline.
//!
//! - [`ContentStore`]: stat, read, write, create and remove resources
//! - [`MediaTypes`]: file extension to media type lookup
//! - [`listing::render`]: HTML directory listings
//! - [`date::http_date`]: RFC 1123 timestamps

pub mod date;
pub mod listing;
mod media;
mod store;

pub use media::{MediaTypes, DEFAULT_MEDIA_TYPE, DIRECTORY_MEDIA_TYPE};
pub use store::{ContentStore, Entry, FsStore, Kind, Stat};
