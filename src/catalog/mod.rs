//! Algorithm catalog
//!
//! A process-wide, read-only registry of algorithm metadata. The registry is
//! built once from the compiled-in entries together with a slug index, and
//! exposes no write path.

mod data;
pub mod slug;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::AlgorithmEntry;

pub use slug::slugify;

/// Global catalog (lazily initialized)
pub static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(data::SORTING_ALGORITHMS).expect("Built-in algorithm catalog is invalid")
});

/// Catalog construction errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Algorithms '{first}' and '{second}' share the slug '{slug}'")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },
}

/// Immutable algorithm registry with an O(1) slug index
#[derive(Debug)]
pub struct Catalog {
    entries: &'static [AlgorithmEntry],
    by_slug: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting names that collapse to the same slug
    pub fn new(entries: &'static [AlgorithmEntry]) -> Result<Self, CatalogError> {
        let mut by_slug = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            let slug = slugify(entry.name);
            if let Some(&existing) = by_slug.get(&slug) {
                let first: &AlgorithmEntry = &entries[existing];
                return Err(CatalogError::DuplicateSlug {
                    slug,
                    first: first.name.to_string(),
                    second: entry.name.to_string(),
                });
            }
            by_slug.insert(slug, position);
        }

        Ok(Self { entries, by_slug })
    }

    /// All entries in declaration order
    pub fn list_all(&self) -> &'static [AlgorithmEntry] {
        self.entries
    }

    /// Look up an entry by slug; `None` means the caller should fall back to
    /// the catalog list.
    pub fn resolve(&self, slug: &str) -> Option<&'static AlgorithmEntry> {
        let entries = self.entries;
        self.by_slug.get(slug).map(|&position| &entries[position])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The global catalog
pub fn catalog() -> &'static Catalog {
    &CATALOG
}
