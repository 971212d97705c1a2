use std::collections::BTreeSet;

use shared::{domain::FilterAxis, protocol::ResourceListQuery};

/// Filter codes selected on each axis. An empty axis means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub branches: BTreeSet<String>,
    pub years: BTreeSet<String>,
    pub resource_types: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, axis: FilterAxis, code: &str) -> Self {
        self.toggle(axis, code, true);
        self
    }

    /// Applies one filter UI event. Returns whether the selection changed;
    /// blank codes are ignored.
    pub fn toggle(&mut self, axis: FilterAxis, code: &str, selected: bool) -> bool {
        let code = code.trim();
        if code.is_empty() {
            return false;
        }
        let codes = self.codes_mut(axis);
        if selected {
            codes.insert(code.to_string())
        } else {
            codes.remove(code)
        }
    }

    pub fn codes(&self, axis: FilterAxis) -> &BTreeSet<String> {
        match axis {
            FilterAxis::Branch => &self.branches,
            FilterAxis::Year => &self.years,
            FilterAxis::ResourceType => &self.resource_types,
        }
    }

    fn codes_mut(&mut self, axis: FilterAxis) -> &mut BTreeSet<String> {
        match axis {
            FilterAxis::Branch => &mut self.branches,
            FilterAxis::Year => &mut self.years,
            FilterAxis::ResourceType => &mut self.resource_types,
        }
    }

    pub fn is_selected(&self, axis: FilterAxis, code: &str) -> bool {
        self.codes(axis).contains(code.trim())
    }

    pub fn is_empty(&self) -> bool {
        FilterAxis::ALL
            .into_iter()
            .all(|axis| self.codes(axis).is_empty())
    }

    pub fn clear(&mut self) {
        for axis in FilterAxis::ALL {
            self.codes_mut(axis).clear();
        }
    }

    /// Rebuilds a selection from the comma-joined wire form.
    pub fn from_query(query: &ResourceListQuery) -> Self {
        let mut selection = Self::default();
        for axis in FilterAxis::ALL {
            for code in query.codes(axis) {
                selection.toggle(axis, code, true);
            }
        }
        selection
    }

    /// Wire form of the selection; axes without codes are omitted.
    pub fn to_query(&self, search: &str) -> ResourceListQuery {
        let join = |axis: FilterAxis| {
            let codes = self.codes(axis);
            (!codes.is_empty()).then(|| codes.iter().map(String::as_str).collect::<Vec<_>>().join(","))
        };
        let search = search.trim();
        ResourceListQuery {
            branches: join(FilterAxis::Branch),
            years: join(FilterAxis::Year),
            types: join(FilterAxis::ResourceType),
            q: (!search.is_empty()).then(|| search.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_and_removes_codes() {
        let mut selection = FilterSelection::new();
        assert!(selection.toggle(FilterAxis::Branch, "cs", true));
        assert!(!selection.toggle(FilterAxis::Branch, "cs", true));
        assert!(selection.is_selected(FilterAxis::Branch, "cs"));
        assert!(selection.toggle(FilterAxis::Branch, "cs", false));
        assert!(!selection.toggle(FilterAxis::Branch, "cs", false));
        assert!(selection.is_empty());
    }

    #[test]
    fn blank_codes_are_ignored() {
        let mut selection = FilterSelection::new();
        assert!(!selection.toggle(FilterAxis::Year, "  ", true));
        assert!(selection.is_empty());
    }

    #[test]
    fn query_round_trip_keeps_every_axis() {
        let selection = FilterSelection::new()
            .with(FilterAxis::Branch, "cs")
            .with(FilterAxis::Branch, "civil")
            .with(FilterAxis::ResourceType, "notes");

        let query = selection.to_query("  graphs ");
        assert_eq!(query.branches.as_deref(), Some("civil,cs"));
        assert_eq!(query.years, None);
        assert_eq!(query.types.as_deref(), Some("notes"));
        assert_eq!(query.q.as_deref(), Some("graphs"));

        assert_eq!(FilterSelection::from_query(&query), selection);
    }

    #[test]
    fn from_query_skips_empty_segments() {
        let query = ResourceListQuery {
            years: Some("1,, 2 ,".to_string()),
            ..ResourceListQuery::default()
        };
        let selection = FilterSelection::from_query(&query);
        assert_eq!(
            selection.years.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["1", "2"]
        );
    }
}
