//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod algorithms;
pub mod health;
pub mod playground;
pub mod sessions;

use axum::{Router, middleware};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{constants::API_BASE_PATH, middleware::logging_middleware, state::AppState};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/algorithms", algorithms::routes())
        .nest("/sessions", sessions::routes())
        .nest("/playground", playground::routes())
}

/// Build the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest(API_BASE_PATH, routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
