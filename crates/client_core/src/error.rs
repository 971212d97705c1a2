use catalog::IngestError;
use thiserror::Error;

/// The catalog could not be retrieved. `load_catalog` absorbs every variant
/// and degrades to the fallback catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("catalog service answered {status}")]
    Status { status: u16 },
    #[error("catalog response could not be read: {0}")]
    InvalidResponse(String),
    #[error("catalog records are invalid: {0}")]
    Ingest(#[from] IngestError),
}

impl CatalogError {
    pub fn invalid_response(detail: impl std::fmt::Display) -> Self {
        Self::InvalidResponse(detail.to_string())
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            Self::invalid_response(err)
        } else {
            Self::Transport(err)
        }
    }
}
