//! Server configuration.
//!
//! Configuration is read once at startup from a properties file of
//! `Name=value` lines (`#` starts a comment line) and is immutable afterwards.
//!
//! | Key              | Default            |
//! |------------------|--------------------|
//! | `Debug`          | `false`            |
//! | `ServerRoot`     | config file's dir  |
//! | `ContentBase`    | `content`          |
//! | `Port`           | `8080`             |
//! | `ServerHost`     | `localhost`        |
//! | `ServerName`     | `<host>:<port>`    |
//! | `ServerProtocol` | `HTTP/1.1`         |
//! | `ContentTypes`   | none               |
//! | `Workers`        | `4`                |

use std::fs;
use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;

use crate::content::MediaTypes;
use crate::headers::HeaderStore;

/// Registered port range accepted for `Port`.
pub const REGISTERED_PORTS: RangeInclusive<u16> = 1024..=49151;

/// Errors that can occur while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Cannot read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file holds no properties.
    #[error("No properties in configuration file {0}")]
    Empty(PathBuf),

    /// `Port` is not a number in the registered port range.
    #[error("Invalid port {0}: must be between 1024 and 49151")]
    InvalidPort(String),

    /// `Workers` is not a positive number.
    #[error("Invalid worker count {0}")]
    InvalidWorkers(String),

    /// The `ContentTypes` file could not be read.
    #[error("Cannot read content types from {path}: {source}")]
    ContentTypes {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The `ContentTypes` file holds no mappings.
    #[error("No content types in {0}")]
    NoContentTypes(PathBuf),
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Trace requests and responses at debug level.
    pub debug: bool,
    /// Directory that request paths are resolved against.
    pub content_root: PathBuf,
    /// The port to listen on, on all interfaces.
    pub port: u16,
    /// Host name of this server.
    pub host: String,
    /// Value of the `Server` response header.
    pub name: String,
    /// Protocol token written in status lines.
    pub protocol: String,
    /// Optional `mime.types` file.
    pub content_types: Option<PathBuf>,
    /// Number of connection worker threads.
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            debug: false,
            content_root: PathBuf::from("content"),
            port: 8080,
            host: "localhost".to_string(),
            name: "localhost:8080".to_string(),
            protocol: "HTTP/1.1".to_string(),
            content_types: None,
            workers: 4,
        }
    }
}

impl ServerConfig {
    /// Load the configuration from a properties file.
    ///
    /// Relative paths in the file are resolved against the file's own
    /// directory, then against `ServerRoot` if that is set.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let properties = parse_properties(&text);
        if properties.is_empty() {
            return Err(ConfigError::Empty(path.to_path_buf()));
        }

        let base = path.parent().unwrap_or(Path::new(""));
        Self::from_properties(&properties, base)
    }

    /// Build a configuration from parsed properties.
    ///
    /// # Arguments
    ///
    /// * `properties` - `Name=value` pairs; names are matched case-insensitively
    /// * `base` - Directory that relative paths are resolved against
    pub fn from_properties(properties: &HeaderStore, base: &Path) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let debug = properties.value("Debug").is_some_and(|v| v.eq_ignore_ascii_case("true"));

        let server_root = match properties.value("ServerRoot") {
            Some(root) => base.join(root),
            None => base.to_path_buf(),
        };
        let content_base = properties.value("ContentBase").unwrap_or("content");
        let content_root = server_root.join(content_base);

        let port = match properties.value("Port") {
            Some(value) => parse_port(value)?,
            None => defaults.port,
        };

        let host = properties.value("ServerHost").map_or(defaults.host, str::to_string);
        let name = properties
            .value("ServerName")
            .map_or_else(|| format!("{host}:{port}"), str::to_string);
        let protocol = properties.value("ServerProtocol").map_or(defaults.protocol, str::to_string);

        let content_types = properties.value("ContentTypes").map(|file| server_root.join(file));

        let workers = match properties.value("Workers") {
            Some(value) => match value.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidWorkers(value.to_string())),
            },
            None => defaults.workers,
        };

        Ok(Self {
            debug,
            content_root,
            port,
            host,
            name,
            protocol,
            content_types,
            workers,
        })
    }

    /// Load the media type table named by `ContentTypes`.
    ///
    /// Without a `ContentTypes` file the table is empty and every file is
    /// served as `application/octet-stream`.
    pub fn load_media_types(&self) -> Result<MediaTypes, ConfigError> {
        let Some(path) = &self.content_types else {
            warn!("No ContentTypes configured, serving everything as application/octet-stream");
            return Ok(MediaTypes::new());
        };

        let media = MediaTypes::load(path).map_err(|source| ConfigError::ContentTypes {
            path: path.clone(),
            source,
        })?;
        if media.is_empty() {
            return Err(ConfigError::NoContentTypes(path.clone()));
        }
        Ok(media)
    }

    /// The listen address: all interfaces on the configured port.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

/// Parse `Name=value` lines into an ordered store.
///
/// Lines starting with `#` and lines without `=` are skipped. Names and values
/// are trimmed.
pub fn parse_properties(text: &str) -> HeaderStore {
    let mut properties = HeaderStore::new();

    for line in text.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        if let Err(e) = properties.put(name.trim(), value.trim()) {
            warn!("Dropping property {name}: {e}");
        }
    }

    properties
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    match value.trim().parse::<u16>() {
        Ok(port) if REGISTERED_PORTS.contains(&port) => Ok(port),
        _ => Err(ConfigError::InvalidPort(value.to_string())),
    }
}
