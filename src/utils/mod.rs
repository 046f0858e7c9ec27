//! Utility functions

pub mod validation;

pub use validation::{check_source_code, parse_playground_language, parse_practice_language};
