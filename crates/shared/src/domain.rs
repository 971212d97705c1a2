use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(ResourceId);
id_newtype!(DocumentId);

impl From<&ResourceId> for DocumentId {
    fn from(value: &ResourceId) -> Self {
        Self(value.0.clone())
    }
}

/// One independent filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterAxis {
    Branch,
    Year,
    ResourceType,
}

impl FilterAxis {
    pub const ALL: [FilterAxis; 3] = [FilterAxis::Branch, FilterAxis::Year, FilterAxis::ResourceType];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterAxis::Branch => "branch",
            FilterAxis::Year => "year",
            FilterAxis::ResourceType => "resource_type",
        }
    }

    /// Query parameter carrying the comma-joined codes for this axis.
    pub fn query_param(self) -> &'static str {
        match self {
            FilterAxis::Branch => "branches",
            FilterAxis::Year => "years",
            FilterAxis::ResourceType => "types",
        }
    }
}

impl fmt::Display for FilterAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter axis '{0}'")]
pub struct UnknownFilterAxis(pub String);

impl FromStr for FilterAxis {
    type Err = UnknownFilterAxis;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "branch" | "branches" => Ok(FilterAxis::Branch),
            "year" | "years" => Ok(FilterAxis::Year),
            "resourcetype" | "resource_type" | "resource_types" | "type" | "types" => {
                Ok(FilterAxis::ResourceType)
            }
            _ => Err(UnknownFilterAxis(raw.to_string())),
        }
    }
}

/// A catalog entry as delivered by the catalog provider.
///
/// Field names on the wire follow the catalog API (`type`, `thumbnail`,
/// `downloadUrl`, `pdfUrl`, `importantQuestionsUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub title: String,
    pub branch: String,
    pub year: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "thumbnail", default)]
    pub thumbnail_ref: String,
    #[serde(rename = "downloadUrl")]
    pub download_ref: String,
    #[serde(
        rename = "pdfUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub document_ref: Option<String>,
    #[serde(
        rename = "importantQuestionsUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub companion_ref: Option<String>,
}

impl Resource {
    /// Reference the viewer renders, falling back to the download reference.
    pub fn document_ref(&self) -> &str {
        self.document_ref
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(&self.download_ref)
    }

    pub fn companion_ref(&self) -> Option<&str> {
        self.companion_ref
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub code: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_reads_catalog_api_field_names() {
        let raw = serde_json::json!({
            "id": "4",
            "title": "Operating Systems",
            "branch": "Computer Science",
            "year": "3rd Year",
            "type": "Question Papers",
            "thumbnail": "thumb.png",
            "downloadUrl": "https://example.org/os.pdf"
        });
        let resource: Resource = serde_json::from_value(raw).expect("resource");
        assert_eq!(resource.kind, "Question Papers");
        assert_eq!(resource.document_ref(), "https://example.org/os.pdf");
        assert_eq!(resource.companion_ref(), None);
    }

    #[test]
    fn blank_document_ref_falls_back_to_download_ref() {
        let raw = serde_json::json!({
            "id": "1",
            "title": "t",
            "branch": "b",
            "year": "y",
            "type": "Notes",
            "downloadUrl": "dl.pdf",
            "pdfUrl": "  "
        });
        let resource: Resource = serde_json::from_value(raw).expect("resource");
        assert_eq!(resource.document_ref(), "dl.pdf");
    }

    #[test]
    fn filter_axis_parses_ui_spellings() {
        assert_eq!("branch".parse::<FilterAxis>(), Ok(FilterAxis::Branch));
        assert_eq!("resourceType".parse::<FilterAxis>(), Ok(FilterAxis::ResourceType));
        assert_eq!("resource-type".parse::<FilterAxis>(), Ok(FilterAxis::ResourceType));
        assert_eq!(" Years ".parse::<FilterAxis>(), Ok(FilterAxis::Year));
        assert!("semester".parse::<FilterAxis>().is_err());
    }
}
