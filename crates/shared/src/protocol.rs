use serde::{Deserialize, Serialize};

use crate::domain::{FilterAxis, FilterOption, Resource};

/// Query string accepted by `GET /api/resources`.
///
/// Each axis carries its selected codes comma-joined, e.g.
/// `?branches=cs,civil&years=2`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl ResourceListQuery {
    pub fn codes(&self, axis: FilterAxis) -> impl Iterator<Item = &str> {
        let raw = match axis {
            FilterAxis::Branch => self.branches.as_deref(),
            FilterAxis::Year => self.years.as_deref(),
            FilterAxis::ResourceType => self.types.as_deref(),
        };
        raw.unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }

    pub fn search(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceListResponse {
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub axis: FilterAxis,
    pub options: Vec<FilterOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptionsResponse {
    pub groups: Vec<FilterGroup>,
}
