//! Catalog response DTOs

use serde::Serialize;

use crate::{catalog::slugify, constants::languages, models::AlgorithmEntry};

/// Catalog card
#[derive(Debug, Serialize)]
pub struct AlgorithmSummary {
    pub slug: String,
    pub name: &'static str,
    pub description: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
}

impl From<&'static AlgorithmEntry> for AlgorithmSummary {
    fn from(entry: &'static AlgorithmEntry) -> Self {
        Self {
            slug: slugify(entry.name),
            name: entry.name,
            description: entry.description,
            time_complexity: entry.time_complexity,
            space_complexity: entry.space_complexity,
        }
    }
}

/// Catalog list response
#[derive(Debug, Serialize)]
pub struct AlgorithmsListResponse {
    pub algorithms: Vec<AlgorithmSummary>,
    pub total: usize,
}

/// Full entry shown in the practice view
#[derive(Debug, Serialize)]
pub struct AlgorithmDetailResponse {
    pub slug: String,
    #[serde(flatten)]
    pub algorithm: &'static AlgorithmEntry,
    /// Languages selectable in the practice view
    pub languages: &'static [&'static str],
    pub default_language: &'static str,
}

impl From<&'static AlgorithmEntry> for AlgorithmDetailResponse {
    fn from(entry: &'static AlgorithmEntry) -> Self {
        Self {
            slug: slugify(entry.name),
            algorithm: entry,
            languages: languages::PRACTICE,
            default_language: languages::DEFAULT_PRACTICE,
        }
    }
}

/// Generated starter code
#[derive(Debug, Serialize)]
pub struct ScaffoldResponse {
    pub algorithm: &'static str,
    pub language: String,
    /// Empty when the language has no scaffold rule
    pub code: String,
}
