//! Catalog retrieval. Providers report failure as a [`CatalogError`];
//! [`load_catalog`] turns that into a fallback catalog so the browsing
//! surface never starts empty-handed.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use catalog::{Catalog, FilterSelection};
use reqwest::Client;
use shared::{domain::Resource, protocol::ResourceListResponse};
use tracing::{info, warn};
use url::Url;

use crate::error::CatalogError;

const RESOURCES_PATH: &str = "api/resources";

#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch(&self, selection: &FilterSelection) -> Result<Vec<Resource>, CatalogError>;
}

/// Where the catalog on screen came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Live,
    Fallback { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub source: CatalogSource,
}

impl LoadedCatalog {
    pub fn live(catalog: Catalog) -> Self {
        Self {
            catalog,
            source: CatalogSource::Live,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, CatalogSource::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&str> {
        match &self.source {
            CatalogSource::Live => None,
            CatalogSource::Fallback { reason } => Some(reason),
        }
    }
}

/// Fetches and validates the catalog. Transport failures, bad statuses,
/// malformed bodies and invalid records all yield `fallback`.
pub async fn load_catalog(
    provider: &dyn CatalogProvider,
    selection: &FilterSelection,
    fallback: Catalog,
) -> LoadedCatalog {
    let fetched = match provider.fetch(selection).await {
        Ok(resources) => Catalog::ingest(resources).map_err(CatalogError::from),
        Err(err) => Err(err),
    };
    match fetched {
        Ok(catalog) => {
            info!(resources = catalog.len(), "catalog loaded");
            LoadedCatalog::live(catalog)
        }
        Err(err) => {
            warn!(error = %err, fallback_resources = fallback.len(), "catalog unavailable, using fallback");
            LoadedCatalog {
                catalog: fallback,
                source: CatalogSource::Fallback {
                    reason: err.to_string(),
                },
            }
        }
    }
}

/// `GET {base}/api/resources` with the selection as comma-joined parameters.
pub struct HttpCatalogProvider {
    http: Client,
    endpoint: Url,
}

impl HttpCatalogProvider {
    pub fn new(base_url: &str) -> Result<Self, CatalogError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self, CatalogError> {
        let mut base = Url::parse(base_url.trim()).map_err(CatalogError::invalid_response)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join(RESOURCES_PATH).map_err(CatalogError::invalid_response)?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalogProvider {
    async fn fetch(&self, selection: &FilterSelection) -> Result<Vec<Resource>, CatalogError> {
        let body: ResourceListResponse = self
            .http
            .get(self.endpoint.clone())
            .query(&selection.to_query(""))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.resources)
    }
}

/// In-memory catalog, returned as-is whatever the selection.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogProvider {
    resources: Vec<Resource>,
}

impl StaticCatalogProvider {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalogProvider {
    async fn fetch(&self, _selection: &FilterSelection) -> Result<Vec<Resource>, CatalogError> {
        Ok(self.resources.clone())
    }
}

/// Catalog stored as JSON on disk, either a bare array or the
/// `{"resources": [...]}` envelope.
#[derive(Debug, Clone)]
pub struct FileCatalogProvider {
    path: PathBuf,
}

impl FileCatalogProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogProvider for FileCatalogProvider {
    async fn fetch(&self, _selection: &FilterSelection) -> Result<Vec<Resource>, CatalogError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|err| {
            CatalogError::invalid_response(format!("{}: {err}", self.path.display()))
        })?;
        Ok(Catalog::from_json_slice(&bytes)?.into_resources())
    }
}

#[cfg(test)]
#[path = "tests/provider_tests.rs"]
mod tests;
