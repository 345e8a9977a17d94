//! URL to filesystem path resolution
//!
//! Every path handed to a method handler comes from here and is guaranteed
//! to be the root directory itself or to lie beneath it.

use crate::error::HandlerError;
use crate::logger;
use hyper::Uri;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

/// Maps request URLs onto paths under a fixed root directory
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    /// `root` must be absolute and already normalized (see `Config::root_dir`)
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the path component of `uri` against the root directory.
    ///
    /// The query string is ignored. Fails with 403 when the normalized path
    /// escapes the root and with 400 when the path cannot be decoded.
    pub fn resolve(&self, uri: &Uri) -> Result<PathBuf, HandlerError> {
        let decoded = decode_path(uri.path()).map_err(|e| {
            logger::log_warning(&format!("Undecodable request path {}: {e}", uri.path()));
            HandlerError::bad_request()
        })?;
        let relative = decoded.strip_prefix('/').unwrap_or(&*decoded);
        let path = normalize(&self.root.join(relative));

        // Component-wise comparison: "/srv/data-other" does not start with "/srv/data"
        if path.starts_with(&self.root) {
            Ok(path)
        } else {
            logger::log_warning(&format!(
                "Path traversal attempt blocked: {} -> {}",
                uri.path(),
                path.display()
            ));
            Err(HandlerError::forbidden())
        }
    }
}

/// Percent-decode a URL path.
///
/// Every `%` must start a two-hex-digit escape and the decoded bytes must be
/// UTF-8; `percent_decode_str` alone would pass `%zz` through literally.
fn decode_path(raw: &str) -> Result<Cow<'_, str>, String> {
    let mut offset = 0;
    while let Some(idx) = raw[offset..].find('%') {
        let at = offset + idx;
        let escape = raw.get(at + 1..at + 3);
        if !escape.is_some_and(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit())) {
            return Err(format!("malformed escape at byte {at}"));
        }
        offset = at + 3;
    }

    percent_decode_str(raw).decode_utf8().map_err(|e| e.to_string())
}

/// Lexically collapse `.` and `..` segments without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(name) => out.push(name),
        }
    }
    out
}
