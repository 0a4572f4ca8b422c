//! PUT: create or replace a file with the request body.

use std::io::BufRead;
use std::path::Path;

use log::warn;

use crate::content::ContentStore;
use crate::parser::{HttpRequest, Method};
use crate::server::dispatch::Dispatcher;
use crate::server::error::Error;
use crate::server::response::{HttpResponse, StatusCode};

impl<S: ContentStore> Dispatcher<S> {
    /// Store the request body at `path`, creating missing parent directories.
    ///
    /// Answers 200 when the file existed before, 201 when it was created.
    pub(crate) fn put<R: BufRead>(&self, request: &HttpRequest, path: &Path, body: &mut R) -> Result<HttpResponse, Error> {
        let framing = self.request_framing(request, Method::PUT)?;
        let not_allowed = || Error::MethodNotAllowed(Method::PUT, request.path.clone());

        if request.path.ends_with('/') {
            return Err(not_allowed());
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.store.make_dirs(parent).map_err(|e| {
                warn!("Cannot create {}: {e}", parent.display());
                not_allowed()
            })?;
        }

        let existed = self.store.stat(path).is_some();
        let mut file = self.store.open_write(path).map_err(|e| {
            warn!("Cannot open {} for writing: {e}", path.display());
            not_allowed()
        })?;
        self.receive_body(body, &mut file, framing)?;

        let status = if existed { StatusCode::Ok } else { StatusCode::Created };
        Ok(self
            .response(status)
            .with_content_type(self.content_type(&request.path))
            .with_header("Location", Self::location(path))
            .with_header("Content-Length", 0))
    }
}
