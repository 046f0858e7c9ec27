//! Editor session handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Session routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::open_session))
        .route(
            "/{id}",
            get(handler::get_session).delete(handler::close_session),
        )
        .route("/{id}/language", put(handler::select_language))
        .route("/{id}/algorithm", put(handler::select_algorithm))
        .route("/{id}/buffer", put(handler::edit_buffer))
        .route("/{id}/submit", post(handler::submit))
}
