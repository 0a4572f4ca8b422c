//! POST: store the request body as a new file inside a directory.

use std::fs::File;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, warn};

use crate::content::ContentStore;
use crate::parser::{HttpRequest, Method};
use crate::server::dispatch::Dispatcher;
use crate::server::error::Error;
use crate::server::response::{HttpResponse, StatusCode};

/// Attempts at finding an unused upload name before giving up.
const MAX_NAME_ATTEMPTS: usize = 16;

impl<S: ContentStore> Dispatcher<S> {
    /// Create the directory at `path` and store the body in a new, uniquely
    /// named file inside it.
    ///
    /// Always answers 201 with the directory as `Location`.
    pub(crate) fn post<R: BufRead>(&self, request: &HttpRequest, path: &Path, body: &mut R) -> Result<HttpResponse, Error> {
        let framing = self.request_framing(request, Method::POST)?;
        let not_allowed = || Error::MethodNotAllowed(Method::POST, request.path.clone());

        if request.path.ends_with('/') {
            return Err(not_allowed());
        }

        self.store.make_dirs(path).map_err(|e| {
            warn!("Cannot create {}: {e}", path.display());
            not_allowed()
        })?;

        let extension = upload_extension(request.get_header("Content-Type"));
        let (mut file, upload) = self.create_upload(path, extension).map_err(|e| {
            warn!("Cannot create upload file in {}: {e}", path.display());
            not_allowed()
        })?;
        let received = self.receive_body(body, &mut file, framing)?;
        debug!("Stored {received} bytes in {}", upload.display());

        Ok(self
            .status_page(StatusCode::Created)
            .with_header("Location", Self::location(path)))
    }

    /// Create a new file with an unused name in `dir`.
    fn create_upload(&self, dir: &Path, extension: &str) -> io::Result<(File, PathBuf)> {
        let mut last_error = None;

        for _ in 0..MAX_NAME_ATTEMPTS {
            let candidate = dir.join(format!("rdm_file_{}.{extension}", unique_token()));
            match self.store.create_new(&candidate) {
                Ok(file) => return Ok((file, candidate)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => last_error = Some(e),
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| io::Error::from(io::ErrorKind::AlreadyExists)))
    }
}

/// File extension for an upload, from the media type of its `Content-Type`.
pub(crate) fn upload_extension(content_type: Option<&str>) -> &'static str {
    let media_type = content_type
        .and_then(|v| v.split(';').next())
        .map(str::trim)
        .unwrap_or_default();

    if media_type.eq_ignore_ascii_case("multipart/form-data") {
        "mime"
    } else if media_type.eq_ignore_ascii_case("text/plain") {
        "txt"
    } else if media_type.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
        "urlencoded"
    } else {
        "bin"
    }
}

/// A name component that differs between calls and between processes.
fn unique_token() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let count = COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.subsec_nanos());
    format!("{:x}{nanos:08x}{count:x}", std::process::id())
}
