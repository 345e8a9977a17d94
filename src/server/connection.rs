// Connection handling module
// Serves each accepted TCP connection on its own task

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Accept a connection and hand it to a spawned task.
pub fn accept_connection(stream: TcpStream, peer_addr: SocketAddr, state: &Arc<AppState>) {
    if state.access_log {
        logger::log_connection_accepted(&peer_addr);
    }

    serve_connection(stream, peer_addr, Arc::clone(state));
}

/// Serve HTTP/1.1 on `stream` until the client goes away.
///
/// No read or write timeout is applied; a stalled client keeps its task alive.
fn serve_connection(stream: TcpStream, peer_addr: SocketAddr, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(state.config.performance.keep_alive);

        let service = service_fn(move |req| {
            let state = Arc::clone(&state);
            async move { handler::handle_request(req, state, peer_addr).await }
        });

        if let Err(err) = builder.serve_connection(io, service).await {
            logger::log_connection_error(&err);
        }
    });
}
