//! Input validation utilities

use crate::{
    constants::{self, MAX_SOURCE_CODE_SIZE},
    error::{AppError, AppResult},
    models::Language,
};

/// Validate source code size in bytes
pub fn validate_source_code(code: &str) -> Result<(), &'static str> {
    if code.len() > MAX_SOURCE_CODE_SIZE {
        return Err("Source code exceeds maximum size of 1MB");
    }
    Ok(())
}

/// Parse a practice language id, falling back to the default when absent
pub fn parse_practice_language(language: Option<&str>) -> AppResult<Language> {
    let Some(id) = language else {
        return Ok(Language::practice_default());
    };
    Language::from_id(id).ok_or_else(|| unsupported(id, constants::languages::PRACTICE))
}

/// Parse a playground language id, falling back to the default when absent
pub fn parse_playground_language(language: Option<&str>) -> AppResult<Language> {
    let Some(id) = language else {
        return Ok(Language::playground_default());
    };
    Language::from_id(id)
        .filter(Language::runs_in_playground)
        .ok_or_else(|| unsupported(id, constants::languages::PLAYGROUND))
}

/// Check submitted code before it is stored or forwarded
pub fn check_source_code(code: &str) -> AppResult<()> {
    validate_source_code(code).map_err(|msg| AppError::Validation(msg.to_string()))
}

fn unsupported(id: &str, supported: &[&str]) -> AppError {
    AppError::UnsupportedLanguage(format!("{}. Supported languages: {:?}", id, supported))
}
