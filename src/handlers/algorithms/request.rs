//! Catalog request DTOs

use serde::Deserialize;

/// Scaffold query parameters
#[derive(Debug, Deserialize)]
pub struct ScaffoldQuery {
    /// Language id; the practice default when omitted
    pub language: Option<String>,
}
