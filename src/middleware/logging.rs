//! Logging middleware

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

use crate::constants::API_BASE_PATH;

/// Request logging middleware
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let group = route_group(&path);

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            group = group,
            status = %status.as_u16(),
            duration_ms = %format!("{:.2}", duration_ms),
            "Request completed with server error"
        );
    } else if status.is_client_error() && status != StatusCode::NOT_FOUND {
        warn!(
            method = %method,
            path = %path,
            group = group,
            status = %status.as_u16(),
            duration_ms = %format!("{:.2}", duration_ms),
            "Request completed with client error"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            group = group,
            status = %status.as_u16(),
            duration_ms = %format!("{:.2}", duration_ms),
            "Request completed"
        );
    }

    response
}

/// Coarse route group used to slice request logs
fn route_group(path: &str) -> &'static str {
    let Some(rest) = path.strip_prefix(API_BASE_PATH) else {
        return "other";
    };

    if rest.starts_with("/algorithms") {
        "algorithms"
    } else if rest.starts_with("/sessions") {
        "sessions"
    } else if rest.starts_with("/playground") {
        "playground"
    } else if rest.starts_with("/health") {
        "health"
    } else {
        "other"
    }
}
