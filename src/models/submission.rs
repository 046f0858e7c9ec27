//! Judge request models

use serde::Serialize;

/// Body of `POST /api/code/test`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub code: String,
    pub language: String,
    /// Present only for the algorithm-practice flow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_name: Option<String>,
}

/// Body of `POST /api/code/run`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunRequest {
    pub code: String,
    pub language: String,
}
