//! File extension to media type resolution.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Media type used when nothing better is known.
pub const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

/// Media type reported for directory-shaped paths.
pub const DIRECTORY_MEDIA_TYPE: &str = "text/directory";

/// Extension to media type table, loaded once at startup and read-only after.
#[derive(Debug, Clone, Default)]
pub struct MediaTypes {
    by_extension: HashMap<String, String>,
}

impl MediaTypes {
    /// An empty table: every file resolves to [`DEFAULT_MEDIA_TYPE`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `mime.types` file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Parse `mime.types` syntax: one media type followed by its extensions
    /// per line, whitespace separated. Lines starting with `#` are comments.
    pub fn parse(text: &str) -> Self {
        let mut by_extension = HashMap::new();

        for line in text.lines().filter(|l| !l.starts_with('#')) {
            let mut fields = line.split_whitespace();
            let Some(media_type) = fields.next() else {
                continue;
            };
            for ext in fields {
                by_extension.insert(ext.to_ascii_lowercase(), media_type.to_string());
            }
        }

        Self { by_extension }
    }

    /// Add or replace one mapping.
    pub fn insert(&mut self, extension: &str, media_type: impl Into<String>) {
        self.by_extension.insert(extension.to_ascii_lowercase(), media_type.into());
    }

    /// Number of known extensions.
    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    /// Whether no extensions are known.
    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }

    /// Media type for a request path or file path.
    ///
    /// Paths ending in `/` are directories. Otherwise the text after the last
    /// `.` of the final segment is looked up case-insensitively.
    pub fn resolve(&self, path: &str) -> &str {
        if path.ends_with('/') {
            return DIRECTORY_MEDIA_TYPE;
        }

        let name = path.rsplit('/').next().unwrap_or(path);
        name.rsplit_once('.')
            .and_then(|(_, ext)| self.by_extension.get(&ext.to_ascii_lowercase()))
            .map_or(DEFAULT_MEDIA_TYPE, String::as_str)
    }
}
