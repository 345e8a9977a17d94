//! PUT: create or overwrite a file with the request body

use super::PathResolver;
use crate::error::HandlerError;
use crate::http::ResponseDescriptor;
use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use hyper::Request;
use std::fmt::Display;
use tokio::fs;
use tokio::io::{AsyncWrite, AsyncWriteExt};

pub async fn handle<B>(
    req: Request<B>,
    resolver: &PathResolver,
) -> Result<ResponseDescriptor, HandlerError>
where
    B: Body<Data = Bytes> + Unpin,
    B::Error: Display,
{
    let path = resolver.resolve(req.uri())?;

    // Truncates an existing file; a failed copy leaves whatever was written
    let mut file = fs::File::create(&path).await?;
    copy_body(req.into_body(), &mut file).await?;

    Ok(ResponseDescriptor::no_content())
}

/// Copy every data frame of `body` into `dest`, in order, then flush.
///
/// Returns the number of bytes written once the destination has finished.
async fn copy_body<B, W>(mut body: B, dest: &mut W) -> Result<usize, HandlerError>
where
    B: Body<Data = Bytes> + Unpin,
    B::Error: Display,
    W: AsyncWrite + Unpin,
{
    let mut written = 0;
    while let Some(frame) = body.frame().await {
        let frame = frame.map_err(|e| HandlerError::Internal(format!("request body: {e}")))?;
        if let Ok(data) = frame.into_data() {
            dest.write_all(&data).await?;
            written += data.len();
        }
    }
    dest.flush().await?;
    Ok(written)
}
