//! Free-run playground handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Playground routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/template", get(handler::get_template))
        .route("/run", post(handler::run_code))
}
