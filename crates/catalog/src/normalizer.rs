//! Short filter codes (`cs`, `2`, `papers`) to the canonical labels stored on
//! catalog resources.
//!
//! A code with no table entry is not an error: the trimmed code itself becomes
//! the needle, so new categories keep matching before a table entry exists.

use std::collections::BTreeMap;

use shared::domain::{FilterAxis, FilterOption};

const BRANCH_LABELS: &[(&str, &str)] = &[
    ("cs", "Computer Science"),
    ("mechanical", "Mechanical"),
    ("electrical", "Electrical"),
    ("civil", "Civil"),
];

const YEAR_LABELS: &[(&str, &str)] = &[
    ("1", "1st Year"),
    ("2", "2nd Year"),
    ("3", "3rd Year"),
    ("4", "4th Year"),
];

const RESOURCE_TYPE_LABELS: &[(&str, &str)] = &[
    ("notes", "Notes"),
    ("papers", "Question Papers"),
    ("books", "Books"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNormalizer {
    tables: BTreeMap<FilterAxis, Vec<FilterOption>>,
}

impl Default for CategoryNormalizer {
    fn default() -> Self {
        let mut normalizer = Self::empty();
        for (axis, table) in [
            (FilterAxis::Branch, BRANCH_LABELS),
            (FilterAxis::Year, YEAR_LABELS),
            (FilterAxis::ResourceType, RESOURCE_TYPE_LABELS),
        ] {
            for (code, label) in table {
                normalizer.insert(axis, *code, *label);
            }
        }
        normalizer
    }
}

impl CategoryNormalizer {
    /// A normalizer with no mappings; every code falls back to itself.
    pub fn empty() -> Self {
        Self {
            tables: FilterAxis::ALL
                .into_iter()
                .map(|axis| (axis, Vec::new()))
                .collect(),
        }
    }

    pub fn with_mapping(
        mut self,
        axis: FilterAxis,
        code: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.insert(axis, code, label);
        self
    }

    /// Adds or relabels a code. Insertion order is the display order.
    pub fn insert(&mut self, axis: FilterAxis, code: impl Into<String>, label: impl Into<String>) {
        let code = normalize_code(&code.into());
        let label = label.into();
        let table = self.tables.entry(axis).or_default();
        match table.iter_mut().find(|option| option.code == code) {
            Some(existing) => existing.label = label,
            None => table.push(FilterOption { code, label }),
        }
    }

    pub fn canonical_label(&self, axis: FilterAxis, code: &str) -> Option<&str> {
        let code = normalize_code(code);
        self.tables
            .get(&axis)?
            .iter()
            .find(|option| option.code == code)
            .map(|option| option.label.as_str())
    }

    pub fn normalize(&self, axis: FilterAxis, code: &str) -> String {
        self.canonical_label(axis, code)
            .map(str::to_string)
            .unwrap_or_else(|| code.trim().to_string())
    }

    /// Case-folded substring needle used by the matcher for one code.
    pub fn needle(&self, axis: FilterAxis, code: &str) -> String {
        fold_case(&self.normalize(axis, code))
    }

    /// Case-insensitive containment of the code's label in `value`.
    pub fn matches(&self, axis: FilterAxis, code: &str, value: &str) -> bool {
        fold_case(value).contains(&self.needle(axis, code))
    }

    pub fn options(&self, axis: FilterAxis) -> &[FilterOption] {
        self.tables.get(&axis).map(Vec::as_slice).unwrap_or_default()
    }
}

fn normalize_code(code: &str) -> String {
    fold_case(code.trim())
}

/// Lower-cases one char at a time. `str::to_lowercase` picks final sigma
/// from context, so folding a prefix could disagree with folding the whole.
pub(crate) fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;
