//! Session response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    catalog::slugify,
    judge::RenderedVerdict,
    models::{AlgorithmEntry, Language},
    session::{SessionSnapshot, SessionState},
};

/// Current state of an editor session
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub slug: String,
    pub algorithm: &'static AlgorithmEntry,
    pub language: Language,
    pub code: String,
    pub state: SessionState,
    pub is_submitting: bool,
    pub generation: u64,
    pub last_result: Option<RenderedVerdict>,
    pub opened_at: DateTime<Utc>,
}

impl From<SessionSnapshot> for SessionResponse {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            id: snapshot.id,
            slug: slugify(snapshot.algorithm.name),
            algorithm: snapshot.algorithm,
            language: snapshot.language,
            code: snapshot.code,
            state: snapshot.state,
            is_submitting: snapshot.state == SessionState::Submitting,
            generation: snapshot.generation,
            last_result: snapshot.last_result.as_ref().map(RenderedVerdict::from),
            opened_at: snapshot.opened_at,
        }
    }
}

/// Whether a submit action reached the judge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitStatus {
    /// Dispatched; the verdict lands on the session when the judge answers
    Submitting,
    /// A submission was already in flight; nothing was sent
    Ignored,
}

/// Outcome of a submit action
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub session_id: Uuid,
    pub status: SubmitStatus,
    pub generation: u64,
    pub message: String,
}

impl SubmitResponse {
    pub fn dispatched(session_id: Uuid, generation: u64) -> Self {
        Self {
            session_id,
            status: SubmitStatus::Submitting,
            generation,
            message: "Submission sent to the judge".to_string(),
        }
    }

    pub fn ignored(session_id: Uuid, generation: u64) -> Self {
        Self {
            session_id,
            status: SubmitStatus::Ignored,
            generation,
            message: "A submission is already in flight".to_string(),
        }
    }
}
