//! Free-text query plus per-axis filters over a catalog.
//!
//! Predicates compose by intersection across axes and by union within one
//! axis's selected codes. Output order is catalog order.

use shared::domain::{FilterAxis, Resource};

use crate::{
    normalizer::{fold_case, CategoryNormalizer},
    selection::FilterSelection,
};

pub struct ResourceMatcher<'n> {
    normalizer: &'n CategoryNormalizer,
}

struct Criteria {
    query: Option<String>,
    axes: Vec<(FilterAxis, Vec<String>)>,
}

impl<'n> ResourceMatcher<'n> {
    pub fn new(normalizer: &'n CategoryNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn filter<'a>(
        &self,
        resources: &'a [Resource],
        query: &str,
        selection: &FilterSelection,
    ) -> Vec<&'a Resource> {
        let criteria = self.criteria(query, selection);
        let matched: Vec<&Resource> = resources
            .iter()
            .filter(|resource| criteria.accepts(resource))
            .collect();
        tracing::trace!(
            total = resources.len(),
            matched = matched.len(),
            "filtered catalog"
        );
        matched
    }

    pub fn count(&self, resources: &[Resource], query: &str, selection: &FilterSelection) -> usize {
        let criteria = self.criteria(query, selection);
        resources
            .iter()
            .filter(|resource| criteria.accepts(resource))
            .count()
    }

    pub fn is_match(&self, resource: &Resource, query: &str, selection: &FilterSelection) -> bool {
        self.criteria(query, selection).accepts(resource)
    }

    fn criteria(&self, query: &str, selection: &FilterSelection) -> Criteria {
        let query = query.trim();
        let axes = FilterAxis::ALL
            .into_iter()
            .filter_map(|axis| {
                let codes = selection.codes(axis);
                if codes.is_empty() {
                    return None;
                }
                let needles = codes
                    .iter()
                    .map(|code| self.normalizer.needle(axis, code))
                    .collect();
                Some((axis, needles))
            })
            .collect();

        Criteria {
            query: (!query.is_empty()).then(|| fold_case(query)),
            axes,
        }
    }
}

impl Criteria {
    fn accepts(&self, resource: &Resource) -> bool {
        if let Some(query) = &self.query {
            let hit = [&resource.title, &resource.branch, &resource.kind]
                .into_iter()
                .any(|field| fold_case(field).contains(query.as_str()));
            if !hit {
                return false;
            }
        }

        self.axes.iter().all(|(axis, needles)| {
            let value = fold_case(axis_value(resource, *axis));
            needles.iter().any(|needle| value.contains(needle.as_str()))
        })
    }
}

fn axis_value(resource: &Resource, axis: FilterAxis) -> &str {
    match axis {
        FilterAxis::Branch => &resource.branch,
        FilterAxis::Year => &resource.year,
        FilterAxis::ResourceType => &resource.kind,
    }
}

#[cfg(test)]
#[path = "tests/matcher_tests.rs"]
mod tests;
