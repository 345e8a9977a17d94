//! GET: stream a file or list a directory

use super::{stat, PathResolver};
use crate::error::HandlerError;
use crate::http::{mime, ResponseDescriptor};
use hyper::{Request, StatusCode};
use tokio::fs;

#[allow(clippy::needless_pass_by_value)]
pub async fn handle<B>(
    req: Request<B>,
    resolver: &PathResolver,
) -> Result<ResponseDescriptor, HandlerError> {
    let path = resolver.resolve(req.uri())?;

    let Some(metadata) = stat(&path).await? else {
        return Ok(ResponseDescriptor::text(StatusCode::NOT_FOUND, "File not found"));
    };

    if metadata.is_dir() {
        // Listing order is whatever the filesystem returns
        let mut entries = fs::read_dir(&path).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            // Non-UTF-8 names are listed lossily (U+FFFD) and cannot be fetched back by name
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        return Ok(ResponseDescriptor::ok(names.join("\n")));
    }

    let file = fs::File::open(&path).await?;
    Ok(ResponseDescriptor::file(file, mime::content_type_for(&path)))
}
