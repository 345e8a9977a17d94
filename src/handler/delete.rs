//! DELETE: remove a file or an empty directory
//!
//! Deleting a path that does not exist succeeds. Removing a non-empty
//! directory fails like any other filesystem error.

use super::{stat, PathResolver};
use crate::error::HandlerError;
use crate::http::ResponseDescriptor;
use hyper::Request;
use tokio::fs;

#[allow(clippy::needless_pass_by_value)]
pub async fn handle<B>(
    req: Request<B>,
    resolver: &PathResolver,
) -> Result<ResponseDescriptor, HandlerError> {
    let path = resolver.resolve(req.uri())?;

    match stat(&path).await? {
        None => {}
        Some(metadata) if metadata.is_dir() => fs::remove_dir(&path).await?,
        Some(_) => fs::remove_file(&path).await?,
    }

    Ok(ResponseDescriptor::no_content())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;
    use tempfile::TempDir;

    fn delete(uri: &str) -> Request<()> {
        Request::delete(uri).body(()).unwrap()
    }

    #[tokio::test]
    async fn test_removes_file_and_empty_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("f.txt"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("empty")).unwrap();
        let resolver = PathResolver::new(dir.path().canonicalize().unwrap());

        let resp = handle(delete("/f.txt"), &resolver).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(!dir.path().join("f.txt").exists());

        let resp = handle(delete("/empty"), &resolver).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(!dir.path().join("empty").exists());
    }

    #[tokio::test]
    async fn test_non_empty_dir_is_fault() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("full")).unwrap();
        std::fs::write(dir.path().join("full/keep.txt"), b"x").unwrap();
        let resolver = PathResolver::new(dir.path().canonicalize().unwrap());

        let result = handle(delete("/full"), &resolver).await;
        assert!(matches!(result, Err(HandlerError::Internal(_))));
        assert!(dir.path().join("full/keep.txt").exists());
    }
}
