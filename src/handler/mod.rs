//! Request handler module
//!
//! Path resolution, the per-method handlers, and the dispatcher that picks
//! between them and normalizes their outcomes.

mod delete;
mod get;
mod put;
pub mod resolve;
pub mod router;

// Re-export main entry points
pub use resolve::PathResolver;
pub use router::handle_request;

use crate::error::HandlerError;
use std::fs::Metadata;
use std::io;
use std::path::Path;

/// Stat `path`, reporting a missing target as `None` rather than an error
async fn stat(path: &Path) -> Result<Option<Metadata>, HandlerError> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => Ok(Some(metadata)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
