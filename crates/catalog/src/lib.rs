//! Catalog model and filtering: code normalization, filter selection,
//! the resource matcher, and validated ingestion.

pub mod fallback;
pub mod ingest;
pub mod matcher;
pub mod normalizer;
pub mod selection;

pub use fallback::demo_catalog;
pub use ingest::{Catalog, IngestError};
pub use matcher::ResourceMatcher;
pub use normalizer::CategoryNormalizer;
pub use selection::FilterSelection;

/// Filters `catalog` with the default category tables.
pub fn filter<'a>(
    catalog: &'a Catalog,
    query: &str,
    selection: &FilterSelection,
) -> Vec<&'a shared::domain::Resource> {
    let normalizer = CategoryNormalizer::default();
    ResourceMatcher::new(&normalizer).filter(catalog.resources(), query, selection)
}
