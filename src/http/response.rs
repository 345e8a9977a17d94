//! HTTP response building module
//!
//! Every handler produces a [`ResponseDescriptor`]; this module turns it into
//! a hyper response, filling in the default status and content type.

use futures::TryStreamExt;
use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Full, StreamBody};
use hyper::body::{Bytes, Frame};
use hyper::header::CONTENT_TYPE;
use hyper::{Response, StatusCode};
use std::io;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

/// Content type used when a handler does not provide one
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Response body type written to the wire
pub type HttpBody = UnsyncBoxBody<Bytes, io::Error>;

/// Payload of a response descriptor
#[derive(Debug)]
pub enum ResponseBody {
    /// Fully materialized payload
    Bytes(Bytes),
    /// File read lazily while the response is being sent
    Stream(File),
}

/// Uniform result of every method handler
#[derive(Debug)]
pub struct ResponseDescriptor {
    /// Defaults to 200 when absent
    pub status: Option<StatusCode>,
    pub body: ResponseBody,
    /// Defaults to `text/plain` when absent
    pub content_type: Option<String>,
}

impl ResponseDescriptor {
    /// 200 response with the given buffered body
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self {
            status: None,
            body: ResponseBody::Bytes(body.into()),
            content_type: None,
        }
    }

    /// Plain-text response with an explicit status
    pub fn text(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status: Some(status),
            body: ResponseBody::Bytes(body.into()),
            content_type: None,
        }
    }

    /// 204 No Content
    pub fn no_content() -> Self {
        Self::text(StatusCode::NO_CONTENT, Bytes::new())
    }

    /// 200 response streaming a file
    pub fn file(file: File, content_type: Option<&str>) -> Self {
        Self {
            status: None,
            body: ResponseBody::Stream(file),
            content_type: content_type.map(ToString::to_string),
        }
    }

    /// Status after applying the default
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    /// Build the hyper response: status line and Content-Type, then the body
    pub fn into_response(self) -> Response<HttpBody> {
        let status = self.status();
        let content_type = self
            .content_type
            .as_deref()
            .unwrap_or(DEFAULT_CONTENT_TYPE);

        let body = match self.body {
            ResponseBody::Bytes(data) => full_body(data),
            ResponseBody::Stream(file) => stream_body(file),
        };

        Response::builder()
            .status(status)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .unwrap_or_else(|e| {
                log_build_error(status, &e);
                let mut fallback = Response::new(full_body(Bytes::from("Internal Server Error")));
                *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                fallback
            })
    }
}

fn full_body(data: Bytes) -> HttpBody {
    Full::new(data).map_err(|never| match never {}).boxed_unsync()
}

fn stream_body(file: File) -> HttpBody {
    StreamBody::new(ReaderStream::new(file).map_ok(Frame::data)).boxed_unsync()
}

/// Log response build error
fn log_build_error(status: StatusCode, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
