//! Catalog service

use crate::{
    catalog::Catalog,
    constants::languages,
    error::{AppError, AppResult},
    handlers::algorithms::response::{AlgorithmSummary, AlgorithmsListResponse, ScaffoldResponse},
    models::AlgorithmEntry,
    scaffold,
};

/// Catalog lookups and scaffold generation
pub struct CatalogService;

impl CatalogService {
    /// All algorithms in declaration order
    pub fn list_algorithms(catalog: &'static Catalog) -> AlgorithmsListResponse {
        let algorithms: Vec<AlgorithmSummary> = catalog
            .list_all()
            .iter()
            .map(AlgorithmSummary::from)
            .collect();

        AlgorithmsListResponse {
            total: algorithms.len(),
            algorithms,
        }
    }

    /// Resolve a slug, signalling `AlgorithmNotFound` for unknown ones
    pub fn resolve(catalog: &'static Catalog, slug: &str) -> AppResult<&'static AlgorithmEntry> {
        catalog
            .resolve(slug)
            .ok_or_else(|| AppError::AlgorithmNotFound(slug.to_string()))
    }

    /// Starter code for an algorithm. Unknown languages get the empty
    /// scaffold rather than an error.
    pub fn scaffold(
        catalog: &'static Catalog,
        slug: &str,
        language: Option<&str>,
    ) -> AppResult<ScaffoldResponse> {
        let entry = Self::resolve(catalog, slug)?;
        let language = language.unwrap_or(languages::DEFAULT_PRACTICE);

        Ok(ScaffoldResponse {
            algorithm: entry.name,
            language: language.to_string(),
            code: scaffold::generate(entry.name, language),
        })
    }
}
