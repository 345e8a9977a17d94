//! Handler failure type
//!
//! Handlers either fail with a structured error that already carries the
//! status and body the client should see, or with an unstructured fault that
//! the dispatcher turns into a 500.

use hyper::StatusCode;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// Failure with an explicit status, returned to the client verbatim
    #[error("{status}: {body}")]
    Http { status: StatusCode, body: String },

    /// Any other failure; its description becomes the 500 response body
    #[error("{0}")]
    Internal(String),
}

impl HandlerError {
    pub fn forbidden() -> Self {
        Self::Http {
            status: StatusCode::FORBIDDEN,
            body: "Forbidden".to_string(),
        }
    }

    pub fn bad_request() -> Self {
        Self::Http {
            status: StatusCode::BAD_REQUEST,
            body: "Bad Request".to_string(),
        }
    }
}

impl From<io::Error> for HandlerError {
    fn from(err: io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_becomes_internal() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        match HandlerError::from(err) {
            HandlerError::Internal(description) => assert_eq!(description, "permission denied"),
            HandlerError::Http { .. } => panic!("io errors must not carry a status"),
        }
    }

    #[test]
    fn test_forbidden_carries_403() {
        let HandlerError::Http { status, body } = HandlerError::forbidden() else {
            panic!("forbidden must be structured");
        };
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, "Forbidden");
    }
}
