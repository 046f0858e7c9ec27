//! Verdict classification and rendering
//!
//! Grading is the judge's job. Locally we only map failures into renderable
//! values and attach the fixed meaning of each tier.

use serde::Serialize;
use tracing::warn;

use crate::{
    constants::ERROR_PREFIX,
    models::{RunOutput, VerdictCategory, VerdictResult},
};

use super::error::{JudgeError, JudgeResult};

/// Verdict as presented to the learner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedVerdict {
    pub category: VerdictCategory,
    pub tone: &'static str,
    pub heading: String,
    pub evaluation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<String>,
}

impl From<&VerdictResult> for RenderedVerdict {
    fn from(verdict: &VerdictResult) -> Self {
        Self {
            category: verdict.category,
            tone: verdict.category.tone(),
            heading: format!("{} Evaluation", verdict.category),
            evaluation: verdict.evaluation.clone(),
            suggestions: verdict.suggestions.clone(),
        }
    }
}

/// Locally synthesized verdict for a failed practice submission
pub fn failure_verdict(error: &JudgeError) -> VerdictResult {
    VerdictResult {
        category: VerdictCategory::Red,
        evaluation: format!("{}{}", ERROR_PREFIX, error),
        suggestions: None,
    }
}

/// Map a practice submission outcome to the verdict to store.
///
/// Judge payloads pass through untouched. A cancelled request yields `None`:
/// its session is gone and nothing should be rendered.
pub fn classify_verdict(outcome: JudgeResult<VerdictResult>) -> Option<VerdictResult> {
    match outcome {
        Ok(verdict) => Some(verdict),
        Err(JudgeError::Cancelled) => None,
        Err(error) => {
            warn!(error = %error, "Submission failed, rendering RED verdict");
            Some(failure_verdict(&error))
        }
    }
}

/// Map a free-run outcome to the output to display
pub fn classify_run(outcome: JudgeResult<RunOutput>) -> Option<RunOutput> {
    match outcome {
        Ok(output) => Some(output),
        Err(JudgeError::Cancelled) => None,
        Err(error) => {
            warn!(error = %error, "Run failed, rendering error output");
            Some(RunOutput {
                output: format!("{}{}", ERROR_PREFIX, error),
            })
        }
    }
}
