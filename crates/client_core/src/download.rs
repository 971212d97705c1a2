use shared::domain::Resource;

use crate::viewer::ViewerDocument;

/// What the host needs to save a document locally. Executing the transfer
/// is left to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub filename: String,
}

impl DownloadRequest {
    /// Downloads whatever the viewer currently shows for `document`.
    pub fn for_document(document: &ViewerDocument) -> Self {
        Self {
            url: document.active_reference().to_string(),
            filename: pdf_filename(document.title()),
        }
    }

    pub fn for_resource(resource: &Resource) -> Self {
        Self {
            url: resource.download_ref.clone(),
            filename: pdf_filename(&resource.title),
        }
    }
}

fn pdf_filename(title: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' | '\0' => '_',
            other => other,
        })
        .collect();
    let stem = if stem.is_empty() { "document" } else { stem.as_str() };
    format!("{stem}.pdf")
}
