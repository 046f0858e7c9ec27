//! Playground response DTOs

use serde::Serialize;

use crate::models::Language;

/// Starter text for the playground editor
#[derive(Debug, Serialize)]
pub struct TemplateResponse {
    pub language: Language,
    pub code: String,
}

/// Program output, or `Error: ...` when the run failed
#[derive(Debug, Serialize)]
pub struct RunCodeResponse {
    pub output: String,
}
