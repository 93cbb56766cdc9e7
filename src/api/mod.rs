// API module entry
// Routes the five diagnostic endpoints; everything else is 404.

mod handlers;
mod response;
mod types;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::logger;
use crate::state::AppState;

/// Per-connection entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    // Bodies, headers, and query parameters are ignored by every endpoint
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    route(&method, &path, &state).await
}

/// Dispatch by method and path
pub async fn route(
    method: &Method,
    path: &str,
    state: &Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    match (method, path) {
        (&Method::GET, "/") => handlers::root(state),
        (&Method::GET, "/health") => handlers::health(state),
        (&Method::GET, "/stats") => handlers::stats(state),
        (&Method::GET, "/slow") => handlers::slow(state).await,
        (&Method::POST, "/crash") => handlers::crash(state),
        _ => {
            logger::log_request(method.as_str(), path, 404);
            Ok(response::not_found())
        }
    }
}
