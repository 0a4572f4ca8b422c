//! DELETE: remove a file or an empty directory.

use std::path::Path;

use log::warn;

use crate::content::ContentStore;
use crate::parser::{HttpRequest, Method};
use crate::server::dispatch::Dispatcher;
use crate::server::error::Error;
use crate::server::response::{HttpResponse, StatusCode};

impl<S: ContentStore> Dispatcher<S> {
    /// Remove the resource at `path`.
    ///
    /// Directories are only removed when requested with a trailing `/` and
    /// empty.
    pub(crate) fn delete(&self, request: &HttpRequest, path: &Path) -> Result<HttpResponse, Error> {
        let stat = self
            .store
            .stat(path)
            .ok_or_else(|| Error::NotFound(request.path.clone()))?;

        let removed = if stat.is_dir() && request.path.ends_with('/') {
            self.store.remove_empty_dir(path)
        } else if stat.is_file() {
            self.store.remove_file(path)
        } else {
            return Err(Error::NotFound(request.path.clone()));
        };

        if let Err(e) = removed {
            warn!("Cannot delete {}: {e}", path.display());
            return Err(Error::MethodNotAllowed(Method::DELETE, request.path.clone()));
        }

        Ok(self.response(StatusCode::Ok).with_header("Content-Length", 0))
    }
}
