//! Session request DTOs

use serde::Deserialize;
use validator::Validate;

/// Open a practice view
#[derive(Debug, Deserialize, Validate)]
pub struct OpenSessionRequest {
    /// Algorithm slug from the route
    #[validate(length(min = 1, max = 128))]
    pub slug: String,

    /// Initial language; the practice default when omitted
    #[validate(length(min = 1, max = 20))]
    pub language: Option<String>,
}

/// Switch the session's language
#[derive(Debug, Deserialize, Validate)]
pub struct SelectLanguageRequest {
    #[validate(length(min = 1, max = 20))]
    pub language: String,
}

/// Switch the session's algorithm
#[derive(Debug, Deserialize, Validate)]
pub struct SelectAlgorithmRequest {
    #[validate(length(min = 1, max = 128))]
    pub slug: String,
}

/// Replace the code buffer
#[derive(Debug, Deserialize, Validate)]
pub struct EditBufferRequest {
    #[validate(length(max = 1048576))] // 1MB max
    pub code: String,
}
