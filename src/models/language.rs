//! Editor language model

use serde::{Deserialize, Serialize};

use crate::constants::languages;

/// Language the learner writes code in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    Python,
    Java,
    Cpp,
}

impl Language {
    /// Every language with a scaffold rule, in selector order
    pub const ALL: [Language; 4] = [
        Language::JavaScript,
        Language::Python,
        Language::Java,
        Language::Cpp,
    ];

    /// Parse a language identifier, returning `None` for unknown ids
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            languages::JAVASCRIPT => Some(Self::JavaScript),
            languages::PYTHON => Some(Self::Python),
            languages::JAVA => Some(Self::Java),
            languages::CPP => Some(Self::Cpp),
            _ => None,
        }
    }

    /// Wire identifier sent to the judge
    pub fn id(&self) -> &'static str {
        match self {
            Self::JavaScript => languages::JAVASCRIPT,
            Self::Python => languages::PYTHON,
            Self::Java => languages::JAVA,
            Self::Cpp => languages::CPP,
        }
    }

    /// Whether the free-run playground accepts this language
    pub fn runs_in_playground(&self) -> bool {
        languages::PLAYGROUND.contains(&self.id())
    }

    /// Language a practice view opens with
    pub fn practice_default() -> Self {
        Self::Cpp
    }

    /// Language the playground opens with
    pub fn playground_default() -> Self {
        Self::Python
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
