//! Access to the resource tree.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// What kind of filesystem object a path names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    File,
    Directory,
    Other,
}

/// Metadata for one resource.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub kind: Kind,
    pub size: u64,
    pub modified: SystemTime,
}

impl Stat {
    /// Whether the path names a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == Kind::Directory
    }

    /// Whether the path names a regular file.
    pub fn is_file(&self) -> bool {
        self.kind == Kind::File
    }
}

/// One directory entry, as shown in a listing.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    pub modified: SystemTime,
}

/// Storage backend for the resource tree.
///
/// All paths are already resolved against the content root. Implementations
/// must be shareable between worker threads; no locking is expected between
/// connections touching the same path.
pub trait ContentStore: Send + Sync {
    /// Stat a path, following symlinks. `None` when the path cannot be
    /// stat'ed, including when nothing exists there.
    fn stat(&self, path: &Path) -> Option<Stat>;

    /// Open an existing file for reading.
    fn open_read(&self, path: &Path) -> io::Result<File>;

    /// Open a file for writing, creating it or truncating existing content.
    fn open_write(&self, path: &Path) -> io::Result<File>;

    /// Create a new file, failing with `AlreadyExists` if the path is taken.
    fn create_new(&self, path: &Path) -> io::Result<File>;

    /// Create a directory and all of its missing parents.
    fn make_dirs(&self, path: &Path) -> io::Result<()>;

    /// Remove a regular file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Remove a directory, which must be empty.
    fn remove_empty_dir(&self, path: &Path) -> io::Result<()>;

    /// List the entries of a directory, excluding `.` and `..`.
    fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>>;
}

/// [`ContentStore`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl FsStore {
    pub fn new() -> Self {
        Self
    }
}

impl ContentStore for FsStore {
    fn stat(&self, path: &Path) -> Option<Stat> {
        let metadata = fs::metadata(path).ok()?;

        let kind = if metadata.is_dir() {
            Kind::Directory
        } else if metadata.is_file() {
            Kind::File
        } else {
            Kind::Other
        };

        Some(Stat {
            kind,
            size: metadata.len(),
            modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        })
    }

    fn open_read(&self, path: &Path) -> io::Result<File> {
        File::open(path)
    }

    fn open_write(&self, path: &Path) -> io::Result<File> {
        OpenOptions::new().write(true).create(true).truncate(true).open(path)
    }

    fn create_new(&self, path: &Path) -> io::Result<File> {
        OpenOptions::new().write(true).create_new(true).open(path)
    }

    fn make_dirs(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_empty_dir(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir(path)
    }

    fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();

        for dirent in fs::read_dir(path)? {
            let dirent = dirent?;
            // Entries that vanish between readdir and stat are skipped
            let Ok(metadata) = fs::metadata(dirent.path()) else {
                continue;
            };
            entries.push(Entry {
                name: dirent.file_name().to_string_lossy().into_owned(),
                is_dir: metadata.is_dir(),
                size: metadata.len(),
                modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
