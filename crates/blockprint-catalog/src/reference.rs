//! Flattened, sorted and grouped view of a manifest for reference output.

use indexmap::IndexMap;

use crate::model::{CatalogEntry, Manifest};

/// Entries of one category, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub entries: Vec<&'a CatalogEntry>,
}

impl CategoryGroup<'_> {
    /// `data-display` becomes `Data display`.
    pub fn title(&self) -> String {
        category_title(self.category)
    }
}

/// Every manifest entry, grouped by category.
///
/// Groups appear in the order their category is first met in the sorted
/// list, so a category with no entries never shows up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceIndex<'a> {
    pub groups: Vec<CategoryGroup<'a>>,
}

impl<'a> ReferenceIndex<'a> {
    pub fn build(manifest: &'a Manifest) -> Self {
        let mut entries: Vec<&CatalogEntry> = manifest.entries().collect();
        entries.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });

        let mut grouped: IndexMap<&str, Vec<&CatalogEntry>> = IndexMap::new();
        for entry in entries {
            grouped.entry(entry.category.as_str()).or_default().push(entry);
        }

        Self {
            groups: grouped
                .into_iter()
                .map(|(category, entries)| CategoryGroup { category, entries })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.entries.len()).sum()
    }
}

/// Capitalize the first letter and turn the first hyphen into a space.
///
/// Later hyphens are kept: `multi-step-form` reads `Multi step-form`.
pub fn category_title(category: &str) -> String {
    let spaced = category.replacen('-', " ", 1);
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
