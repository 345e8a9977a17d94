//! Request dispatch module
//!
//! Entry point for HTTP request processing: picks the handler for the
//! request method, runs it, and turns its outcome into a response.

use super::{delete, get, put, PathResolver};
use crate::config::AppState;
use crate::error::HandlerError;
use crate::http::{HttpBody, ResponseBody, ResponseDescriptor};
use crate::logger::{self, AccessLogEntry};
use hyper::body::{Body, Bytes};
use hyper::header::USER_AGENT;
use hyper::{Method, Request, Response, StatusCode, Version};
use std::convert::Infallible;
use std::fmt::Display;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Handler selected for a request method (matched exactly, case-sensitive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MethodHandler {
    Get,
    Put,
    Delete,
    NotAllowed,
}

impl MethodHandler {
    fn for_method(method: &Method) -> Self {
        match *method {
            Method::GET => Self::Get,
            Method::PUT => Self::Put,
            Method::DELETE => Self::Delete,
            _ => Self::NotAllowed,
        }
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<HttpBody>, Infallible>
where
    B: Body<Data = Bytes> + Unpin,
    B::Error: Display,
{
    let started = Instant::now();
    let entry = state
        .access_log
        .then(|| access_entry(&req, remote_addr));

    let descriptor = dispatch(req, &state.resolver).await;

    if let Some(mut entry) = entry {
        entry.status = descriptor.status().as_u16();
        entry.body_bytes = match &descriptor.body {
            ResponseBody::Bytes(data) => u64::try_from(data.len()).ok(),
            ResponseBody::Stream(_) => None,
        };
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(descriptor.into_response())
}

/// Run the handler for the request method and normalize its outcome.
///
/// Structured failures keep their status and body; any other fault becomes
/// a 500 whose body is the fault's description.
pub async fn dispatch<B>(req: Request<B>, resolver: &PathResolver) -> ResponseDescriptor
where
    B: Body<Data = Bytes> + Unpin,
    B::Error: Display,
{
    let method = req.method().clone();
    let uri = req.uri().clone();

    let outcome = match MethodHandler::for_method(&method) {
        MethodHandler::Get => get::handle(req, resolver).await,
        MethodHandler::Put => put::handle(req, resolver).await,
        MethodHandler::Delete => delete::handle(req, resolver).await,
        MethodHandler::NotAllowed => Ok(not_allowed(&method)),
    };

    match outcome {
        Ok(descriptor) => descriptor,
        Err(HandlerError::Http { status, body }) => ResponseDescriptor::text(status, body),
        Err(HandlerError::Internal(description)) => {
            logger::log_error(&format!("{method} {uri} failed: {description}"));
            ResponseDescriptor::text(StatusCode::INTERNAL_SERVER_ERROR, description)
        }
    }
}

/// Fallback for every method without a handler; never touches the filesystem
fn not_allowed(method: &Method) -> ResponseDescriptor {
    ResponseDescriptor::text(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("Method {method} not allowed."),
    )
}

fn access_entry<B>(req: &Request<B>, remote_addr: SocketAddr) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        remote_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = match req.version() {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
    .to_string();
    entry.user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    entry
}
