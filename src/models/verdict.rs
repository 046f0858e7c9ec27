//! Verdict models returned by the judge

use serde::{Deserialize, Serialize};

use crate::constants::verdicts;

/// Verdict tier. Grading criteria live entirely in the judge; the tier is
/// treated as an opaque enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictCategory {
    /// Correct
    Green,
    /// Partially correct, style or edge-case issues
    Yellow,
    /// Incorrect or errored
    Red,
}

impl VerdictCategory {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => verdicts::GREEN,
            Self::Yellow => verdicts::YELLOW,
            Self::Red => verdicts::RED,
        }
    }

    /// Fixed meaning shown alongside the tier
    pub fn tone(&self) -> &'static str {
        match self {
            Self::Green => "correct",
            Self::Yellow => "partially_correct",
            Self::Red => "incorrect",
        }
    }
}

impl std::fmt::Display for VerdictCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Practice-flow result, either from the judge or synthesized locally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictResult {
    pub category: VerdictCategory,
    pub evaluation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<String>,
}

/// Free-run result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutput {
    pub output: String,
}
