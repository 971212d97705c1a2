use catalog::{Catalog, CategoryNormalizer, FilterSelection, ResourceMatcher};
use shared::{
    domain::{FilterAxis, Resource, ResourceId},
    error::{ApiError, ErrorCode},
    protocol::{FilterGroup, FilterOptionsResponse, ResourceListQuery, ResourceListResponse},
};

/// Longest free-text search accepted, in chars.
pub const MAX_SEARCH_CHARS: usize = 256;

#[derive(Clone)]
pub struct ApiContext {
    pub catalog: Catalog,
    pub normalizer: CategoryNormalizer,
}

impl ApiContext {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            normalizer: CategoryNormalizer::default(),
        }
    }
}

pub fn resources_route() -> &'static str {
    "/api/resources"
}

pub fn filters_route() -> &'static str {
    "/api/filters"
}

pub fn list_resources(
    ctx: &ApiContext,
    query: &ResourceListQuery,
) -> Result<ResourceListResponse, ApiError> {
    let search_chars = query.search().chars().count();
    if search_chars > MAX_SEARCH_CHARS {
        return Err(ApiError::new(
            ErrorCode::Validation,
            format!("search is {search_chars} chars, at most {MAX_SEARCH_CHARS} allowed"),
        ));
    }
    let selection = FilterSelection::from_query(query);
    let resources = ResourceMatcher::new(&ctx.normalizer)
        .filter(ctx.catalog.resources(), query.search(), &selection)
        .into_iter()
        .cloned()
        .collect();
    Ok(ResourceListResponse { resources })
}

pub fn get_resource(ctx: &ApiContext, id: &ResourceId) -> Result<Resource, ApiError> {
    ctx.catalog.get(id).cloned().ok_or_else(|| {
        ApiError::new(
            ErrorCode::NotFound,
            format!("resource '{id}' does not exist"),
        )
    })
}

pub fn list_filter_options(ctx: &ApiContext) -> FilterOptionsResponse {
    FilterOptionsResponse {
        groups: FilterAxis::ALL
            .into_iter()
            .map(|axis| FilterGroup {
                axis,
                options: ctx.normalizer.options(axis).to_vec(),
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
