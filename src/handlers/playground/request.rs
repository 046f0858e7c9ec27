//! Playground request DTOs

use serde::Deserialize;
use validator::Validate;

/// Template query parameters
#[derive(Debug, Deserialize)]
pub struct TemplateQuery {
    pub language: Option<String>,
}

/// Run free-form code
#[derive(Debug, Deserialize, Validate)]
pub struct RunCodeRequest {
    #[validate(length(max = 1048576))] // 1MB max
    pub code: String,

    #[validate(length(min = 1, max = 20))]
    pub language: String,
}
