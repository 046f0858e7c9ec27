//! Session handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{error::AppResult, services::SessionService, state::AppState};

use super::{
    request::{EditBufferRequest, OpenSessionRequest, SelectAlgorithmRequest, SelectLanguageRequest},
    response::{SessionResponse, SubmitResponse, SubmitStatus},
};

/// Open a practice view for an algorithm
pub async fn open_session(
    State(state): State<AppState>,
    Json(payload): Json<OpenSessionRequest>,
) -> AppResult<(StatusCode, Json<SessionResponse>)> {
    payload.validate()?;

    let session = SessionService::open(
        state.catalog(),
        state.sessions(),
        &payload.slug,
        payload.language.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(session)))
}

/// Get the current session state, including the last verdict
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SessionResponse>> {
    let session = SessionService::get(state.sessions(), id).await?;
    Ok(Json(session))
}

/// Tear down a session
pub async fn close_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    SessionService::close(state.sessions(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Switch language, replacing the buffer with a fresh scaffold
pub async fn select_language(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SelectLanguageRequest>,
) -> AppResult<Json<SessionResponse>> {
    payload.validate()?;

    let session = SessionService::select_language(state.sessions(), id, &payload.language).await?;
    Ok(Json(session))
}

/// Switch algorithm, replacing the buffer with a fresh scaffold
pub async fn select_algorithm(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SelectAlgorithmRequest>,
) -> AppResult<Json<SessionResponse>> {
    payload.validate()?;

    let session =
        SessionService::select_algorithm(state.catalog(), state.sessions(), id, &payload.slug)
            .await?;
    Ok(Json(session))
}

/// Replace the code buffer
pub async fn edit_buffer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EditBufferRequest>,
) -> AppResult<Json<SessionResponse>> {
    payload.validate()?;

    let session = SessionService::edit_buffer(state.sessions(), id, payload.code).await?;
    Ok(Json(session))
}

/// Submit the buffer to the judge
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<SubmitResponse>)> {
    let response = SessionService::submit(state.sessions(), state.judge(), id).await?;

    let status = match response.status {
        SubmitStatus::Submitting => StatusCode::ACCEPTED,
        SubmitStatus::Ignored => StatusCode::OK,
    };

    Ok((status, Json(response)))
}
