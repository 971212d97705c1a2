//! Client side of the resource hub: catalog retrieval, the multi-document
//! viewer session and the coordinator that ties browsing to viewing.

pub mod coordinator;
pub mod download;
pub mod error;
pub mod provider;
pub mod viewer;

pub use coordinator::{document_from_resource, BrowseSession, ResultsView};
pub use download::DownloadRequest;
pub use error::CatalogError;
pub use provider::{
    load_catalog, CatalogProvider, CatalogSource, FileCatalogProvider, HttpCatalogProvider,
    LoadedCatalog, StaticCatalogProvider,
};
pub use viewer::{
    IgnoredTransition, LoadStatus, Transition, ViewMode, ViewerCommand, ViewerDocument,
    ViewerSession,
};
