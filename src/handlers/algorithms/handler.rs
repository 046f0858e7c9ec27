//! Catalog handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{error::AppResult, services::CatalogService, state::AppState};

use super::{
    request::ScaffoldQuery,
    response::{AlgorithmDetailResponse, AlgorithmsListResponse, ScaffoldResponse},
};

/// List the catalog in declaration order
pub async fn list_algorithms(State(state): State<AppState>) -> Json<AlgorithmsListResponse> {
    Json(CatalogService::list_algorithms(state.catalog()))
}

/// Get one algorithm; unknown slugs redirect to the list
pub async fn get_algorithm(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<AlgorithmDetailResponse>> {
    let entry = CatalogService::resolve(state.catalog(), &slug)?;
    Ok(Json(AlgorithmDetailResponse::from(entry)))
}

/// Generate starter code for an algorithm
pub async fn get_scaffold(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<ScaffoldQuery>,
) -> AppResult<Json<ScaffoldResponse>> {
    let scaffold = CatalogService::scaffold(state.catalog(), &slug, query.language.as_deref())?;
    Ok(Json(scaffold))
}
