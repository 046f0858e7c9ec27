//! Algorithm catalog entry model

use serde::Serialize;

/// A sorting algorithm offered for practice.
///
/// Entries are compiled into the binary and never mutated, so every field
/// borrows static text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmEntry {
    /// Display name, unique across the catalog
    pub name: &'static str,
    pub description: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub pseudocode: &'static str,
    /// Sample input/output shown next to the editor
    pub sample_test_case: &'static str,
}

impl AlgorithmEntry {
    /// Identifier used for generated function and class names
    pub fn function_name(&self) -> String {
        crate::scaffold::function_name(self.name)
    }
}
