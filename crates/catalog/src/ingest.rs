use std::collections::HashSet;

use serde::Deserialize;
use shared::{
    domain::{Resource, ResourceId},
    protocol::ResourceListResponse,
};
use thiserror::Error;

/// Structural problems that make a record unusable. These are contract
/// violations of the catalog source and are rejected before any filtering.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("resource at position {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
    #[error("resource id '{0}' appears more than once")]
    DuplicateId(ResourceId),
    #[error("catalog payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered, validated sequence of resources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    resources: Vec<Resource>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    Envelope(ResourceListResponse),
    Bare(Vec<Resource>),
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Skips validation. Only for the built-in demo records.
    pub(crate) fn from_validated(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    pub fn ingest(resources: Vec<Resource>) -> Result<Self, IngestError> {
        let mut seen = HashSet::with_capacity(resources.len());
        for (index, resource) in resources.iter().enumerate() {
            validate_resource(index, resource)?;
            if !seen.insert(&resource.id) {
                return Err(IngestError::DuplicateId(resource.id.clone()));
            }
        }
        Ok(Self { resources })
    }

    /// Accepts either a bare JSON array or the `{"resources": [...]}` body
    /// served by the catalog API.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, IngestError> {
        let resources = match serde_json::from_slice::<CatalogPayload>(bytes)? {
            CatalogPayload::Envelope(body) => body.resources,
            CatalogPayload::Bare(resources) => resources,
        };
        Self::ingest(resources)
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn into_resources(self) -> Vec<Resource> {
        self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn get(&self, id: &ResourceId) -> Option<&Resource> {
        self.resources.iter().find(|resource| &resource.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Resource> {
        self.resources.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Resource;
    type IntoIter = std::slice::Iter<'a, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}

fn validate_resource(index: usize, resource: &Resource) -> Result<(), IngestError> {
    let required = [
        ("id", resource.id.as_str()),
        ("title", resource.title.as_str()),
        ("downloadUrl", resource.download_ref.as_str()),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(IngestError::EmptyField { index, field });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/ingest_tests.rs"]
mod tests;
