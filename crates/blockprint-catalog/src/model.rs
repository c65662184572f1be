use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Category assigned to entries whose annotation block carries no `@category`.
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// One documented property of a building block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropSpec {
    pub name: String,
    /// Free-form type text, copied verbatim from the annotation.
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl PropSpec {
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            description: description.into(),
            default: None,
        }
    }

    /// Attach a default value.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// One documented return value of a hook or utility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
}

impl ReturnSpec {
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            description: description.into(),
        }
    }
}

/// A single documented building block (component, layout, utility, hook or dataset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
    /// Path relative to the source base, always with `/` separators.
    #[serde(default)]
    pub file_path: String,
    #[serde(default)]
    pub props: Vec<PropSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<Vec<ReturnSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_data: Option<Vec<String>>,
}

impl CatalogEntry {
    /// Creates an entry with default category and no tags, props or returns.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            tags: Vec::new(),
            category: DEFAULT_CATEGORY.to_string(),
            file_path: String::new(),
            props: Vec::new(),
            returns: None,
            available_data: None,
        }
    }

    /// Looks up a documented property by name.
    pub fn prop(&self, name: &str) -> Option<&PropSpec> {
        self.props.iter().find(|prop| prop.name == name)
    }
}

/// The five named collections of a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Components,
    Layouts,
    Utils,
    Hooks,
    Data,
}

impl Collection {
    /// All collections in manifest order.
    pub const ALL: [Collection; 5] = [
        Collection::Components,
        Collection::Layouts,
        Collection::Utils,
        Collection::Hooks,
        Collection::Data,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Components => "components",
            Collection::Layouts => "layouts",
            Collection::Utils => "utils",
            Collection::Hooks => "hooks",
            Collection::Data => "data",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated catalog of every documented building block.
///
/// Entries are only ever appended. Duplicate names are kept as-is.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub components: Vec<CatalogEntry>,
    #[serde(default)]
    pub layouts: Vec<CatalogEntry>,
    #[serde(default)]
    pub utils: Vec<CatalogEntry>,
    #[serde(default)]
    pub hooks: Vec<CatalogEntry>,
    #[serde(default)]
    pub data: Vec<CatalogEntry>,
}

impl Manifest {
    /// Returns the entries of one collection.
    pub fn collection(&self, collection: Collection) -> &[CatalogEntry] {
        match collection {
            Collection::Components => &self.components,
            Collection::Layouts => &self.layouts,
            Collection::Utils => &self.utils,
            Collection::Hooks => &self.hooks,
            Collection::Data => &self.data,
        }
    }

    /// Appends an entry to the given collection.
    pub fn push(&mut self, collection: Collection, entry: CatalogEntry) {
        let target = match collection {
            Collection::Components => &mut self.components,
            Collection::Layouts => &mut self.layouts,
            Collection::Utils => &mut self.utils,
            Collection::Hooks => &mut self.hooks,
            Collection::Data => &mut self.data,
        };
        target.push(entry);
    }

    /// Iterates over every entry, collection by collection, in manifest order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        Collection::ALL
            .into_iter()
            .flat_map(move |collection| self.collection(collection).iter())
    }

    pub fn len(&self) -> usize {
        Collection::ALL
            .iter()
            .map(|collection| self.collection(*collection).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First entry named `name` in `collection`.
    pub fn find(&self, collection: Collection, name: &str) -> Option<&CatalogEntry> {
        self.collection(collection)
            .iter()
            .find(|entry| entry.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_and_omits_absent_fields() {
        let mut entry = CatalogEntry::new("Button");
        entry.file_path = "components/ui/Button.tsx".to_string();
        entry.props.push(PropSpec::new("variant", "string", "Visual style"));

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["filePath"], "components/ui/Button.tsx");
        assert_eq!(value["category"], "uncategorized");
        assert_eq!(value["props"][0]["type"], "string");
        assert!(value["props"][0].get("default").is_none());
        assert!(value.get("returns").is_none());
        assert!(value.get("availableData").is_none());
    }

    #[test]
    fn push_appends_without_deduplicating() {
        let mut manifest = Manifest::default();
        manifest.push(Collection::Components, CatalogEntry::new("Card"));
        manifest.push(Collection::Components, CatalogEntry::new("Card"));
        manifest.push(Collection::Hooks, CatalogEntry::new("useTheme"));

        assert_eq!(manifest.components.len(), 2);
        assert_eq!(manifest.len(), 3);
        let names: Vec<_> = manifest.entries().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["Card", "Card", "useTheme"]);
    }
}
