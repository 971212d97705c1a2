//! Glue between the browsing surface and the viewer: owns the loaded
//! catalog, the search query, the filter selection and the viewer session.

use catalog::{Catalog, CategoryNormalizer, FilterSelection, ResourceMatcher};
use shared::domain::{DocumentId, FilterAxis, Resource, ResourceId};
use tracing::debug;

use crate::{
    download::DownloadRequest,
    provider::{CatalogSource, LoadedCatalog},
    viewer::{IgnoredTransition, Transition, ViewerDocument, ViewerSession},
};

/// Builds the viewer entry for a catalog resource. The companion reference,
/// when present, becomes the Alternate view.
pub fn document_from_resource(resource: &Resource) -> ViewerDocument {
    let document = ViewerDocument::new(
        DocumentId::from(&resource.id),
        resource.title.clone(),
        resource.document_ref(),
    );
    match resource.companion_ref() {
        Some(companion) => document.with_alternate(companion),
        None => document,
    }
}

/// Result list as the browsing surface should present it. An empty catalog
/// and a filter that matched nothing read differently to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView<'a> {
    Matches(Vec<&'a Resource>),
    EmptyCatalog,
    NoMatches,
}

#[derive(Debug, Clone)]
pub struct BrowseSession {
    catalog: Catalog,
    source: CatalogSource,
    normalizer: CategoryNormalizer,
    query: String,
    selection: FilterSelection,
    viewer: ViewerSession,
}

impl BrowseSession {
    pub fn new(loaded: LoadedCatalog) -> Self {
        Self::with_normalizer(loaded, CategoryNormalizer::default())
    }

    pub fn with_normalizer(loaded: LoadedCatalog, normalizer: CategoryNormalizer) -> Self {
        Self {
            catalog: loaded.catalog,
            source: loaded.source,
            normalizer,
            query: String::new(),
            selection: FilterSelection::new(),
            viewer: ViewerSession::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, CatalogSource::Fallback { .. })
    }

    pub fn normalizer(&self) -> &CategoryNormalizer {
        &self.normalizer
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn toggle_filter(&mut self, axis: FilterAxis, code: &str, selected: bool) -> bool {
        let changed = self.selection.toggle(axis, code, selected);
        debug!(%axis, code, selected, changed, "filter toggled");
        changed
    }

    pub fn clear_filters(&mut self) {
        self.selection.clear();
    }

    pub fn results(&self) -> Vec<&Resource> {
        ResourceMatcher::new(&self.normalizer).filter(
            self.catalog.resources(),
            &self.query,
            &self.selection,
        )
    }

    pub fn results_view(&self) -> ResultsView<'_> {
        if self.catalog.is_empty() {
            return ResultsView::EmptyCatalog;
        }
        let matches = self.results();
        if matches.is_empty() {
            ResultsView::NoMatches
        } else {
            ResultsView::Matches(matches)
        }
    }

    pub fn open_from_resource(&mut self, resource: &Resource) -> Transition {
        self.viewer.open(document_from_resource(resource))
    }

    /// Opens a catalog resource by id. Ids missing from the catalog are
    /// ignored like any other stale request.
    pub fn open_by_id(&mut self, id: &ResourceId) -> Transition {
        let Some(resource) = self.catalog.get(id) else {
            debug!(resource_id = %id, "open requested for unknown resource");
            return Transition::Ignored(IgnoredTransition::UnknownDocument);
        };
        let document = document_from_resource(resource);
        self.viewer.open(document)
    }

    /// Download request for the active tab, following its view mode.
    pub fn download_active(&self) -> Option<DownloadRequest> {
        self.viewer
            .active_document()
            .map(DownloadRequest::for_document)
    }

    pub fn viewer(&self) -> &ViewerSession {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut ViewerSession {
        &mut self.viewer
    }
}

#[cfg(test)]
#[path = "tests/coordinator_tests.rs"]
mod tests;
