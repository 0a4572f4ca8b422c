//! GET and HEAD.

use std::path::Path;

use crate::content::listing;
use crate::content::{date, ContentStore, Entry};
use crate::parser::HttpRequest;
use crate::server::dispatch::Dispatcher;
use crate::server::error::Error;
use crate::server::response::{HttpResponse, StatusCode};

impl<S: ContentStore> Dispatcher<S> {
    /// Serve a file, or a listing for a directory requested with a trailing
    /// `/`.
    ///
    /// HEAD calls this with `send_body = false` and gets the same headers
    /// without opening the file.
    pub(crate) fn get(&self, request: &HttpRequest, path: &Path, send_body: bool) -> Result<HttpResponse, Error> {
        let not_found = || Error::NotFound(request.path.clone());
        let stat = self.store.stat(path).ok_or_else(not_found)?;

        if stat.is_dir() && request.path.ends_with('/') {
            let entries = self.store.list_entries(path).map_err(|_| not_found())?;
            let parent = self.parent_entry(request, path);
            let page = listing::render(&request.path, &entries, parent.as_ref());

            return Ok(self
                .response(StatusCode::Ok)
                .with_header("Last-Modified", date::http_date(stat.modified))
                .with_content_type(self.content_type(&request.path))
                .with_body_bytes(page));
        }

        if !stat.is_file() {
            return Err(not_found());
        }

        let response = self
            .response(StatusCode::Ok)
            .with_header("Last-Modified", date::http_date(stat.modified))
            .with_content_type(self.content_type(&request.path));

        if !send_body {
            return Ok(response.with_header("Content-Length", stat.size));
        }

        let file = self.store.open_read(path).map_err(|_| not_found())?;
        if request.is_chunked() {
            Ok(response.with_chunked_body(file, stat.size))
        } else {
            Ok(response.with_sized_body(file, stat.size))
        }
    }

    /// The "Parent Directory" row, omitted at the content root.
    fn parent_entry(&self, request: &HttpRequest, path: &Path) -> Option<Entry> {
        if request.path == "/" {
            return None;
        }

        let stat = self.store.stat(&path.join(".."))?;
        Some(Entry {
            name: "..".to_string(),
            is_dir: true,
            size: stat.size,
            modified: stat.modified,
        })
    }
}
