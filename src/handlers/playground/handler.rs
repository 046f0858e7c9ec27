//! Playground handler implementations

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::{error::AppResult, services::PlaygroundService, state::AppState};

use super::{
    request::{RunCodeRequest, TemplateQuery},
    response::{RunCodeResponse, TemplateResponse},
};

/// Starter text for a playground language
pub async fn get_template(Query(query): Query<TemplateQuery>) -> AppResult<Json<TemplateResponse>> {
    Ok(Json(PlaygroundService::template(query.language.as_deref())?))
}

/// Run free-form code on the judge
pub async fn run_code(
    State(state): State<AppState>,
    Json(payload): Json<RunCodeRequest>,
) -> AppResult<Json<RunCodeResponse>> {
    payload.validate()?;

    let response = PlaygroundService::run(state.judge().as_ref(), payload).await?;
    Ok(Json(response))
}
