//! Canvas archetypes and the blocks each one offers.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use blockprint_catalog::{CatalogEntry, Manifest};
use serde::{Deserialize, Serialize};

use crate::error::WizardError;

/// Coarse page purpose chosen in the first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CanvasType {
    Dashboard,
    DataDisplay,
    FormEntry,
    ComponentShowcase,
    CustomBlank,
}

impl CanvasType {
    pub const ALL: [CanvasType; 5] = [
        CanvasType::Dashboard,
        CanvasType::DataDisplay,
        CanvasType::FormEntry,
        CanvasType::ComponentShowcase,
        CanvasType::CustomBlank,
    ];

    pub fn id(self) -> &'static str {
        match self {
            CanvasType::Dashboard => "dashboard",
            CanvasType::DataDisplay => "data-display",
            CanvasType::FormEntry => "form-entry",
            CanvasType::ComponentShowcase => "component-showcase",
            CanvasType::CustomBlank => "custom-blank",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CanvasType::Dashboard => "Dashboard Page",
            CanvasType::DataDisplay => "Data Display Page",
            CanvasType::FormEntry => "Form Entry Page",
            CanvasType::ComponentShowcase => "Component Showcase",
            CanvasType::CustomBlank => "Custom Blank Page",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CanvasType::Dashboard => "A page with various charts and data tables.",
            CanvasType::DataDisplay => "Focus on presenting tabular data or lists.",
            CanvasType::FormEntry => "A page designed for user input and data submission.",
            CanvasType::ComponentShowcase => {
                "Explore and test individual UI components from the library."
            }
            CanvasType::CustomBlank => "Start from a clean slate with basic layout structure.",
        }
    }

    fn rule(self) -> &'static CandidateRule {
        match self {
            CanvasType::Dashboard => &DASHBOARD,
            CanvasType::DataDisplay => &DATA_DISPLAY,
            CanvasType::FormEntry => &FORM_ENTRY,
            CanvasType::ComponentShowcase => &COMPONENT_SHOWCASE,
            CanvasType::CustomBlank => &CUSTOM_BLANK,
        }
    }

    /// Whether the canvas offers `entry` as a block.
    pub fn admits(self, entry: &CatalogEntry) -> bool {
        self.rule().admits(entry)
    }

    /// Canvas is worth offering when one of these categories is present.
    /// `None` means it is always offered.
    fn offered_for(self) -> Option<&'static [&'static str]> {
        match self {
            CanvasType::Dashboard => Some(&["charts", "data-display"]),
            CanvasType::DataDisplay => Some(&["data-display"]),
            CanvasType::FormEntry => Some(&["form"]),
            CanvasType::ComponentShowcase => Some(&["ui", "feedback", "navigation"]),
            CanvasType::CustomBlank => None,
        }
    }
}

impl fmt::Display for CanvasType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CanvasType {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanvasType::ALL
            .into_iter()
            .find(|canvas| canvas.id() == s.trim().to_lowercase())
            .ok_or_else(|| WizardError::UnknownCanvas(s.to_string()))
    }
}

/// Predicate selecting the blocks of one canvas.
#[derive(Debug)]
enum CandidateRule {
    /// Category in the list, or name in the list.
    Include {
        categories: &'static [&'static str],
        names: &'static [&'static str],
    },
    /// Any category except those listed.
    Exclude { categories: &'static [&'static str] },
}

impl CandidateRule {
    fn admits(&self, entry: &CatalogEntry) -> bool {
        let listed = |list: &[&str], value: &str| list.iter().any(|item| *item == value);
        match self {
            CandidateRule::Include { categories, names } => {
                listed(*categories, &entry.category) || listed(*names, &entry.name)
            }
            CandidateRule::Exclude { categories } => !listed(*categories, &entry.category),
        }
    }
}

static DASHBOARD: CandidateRule = CandidateRule::Include {
    categories: &["charts", "data-display"],
    names: &["StatCard", "ActivityFeed"],
};

static DATA_DISPLAY: CandidateRule = CandidateRule::Include {
    categories: &["data-display"],
    names: &["Table", "DataTable", "Pagination", "EmptyState"],
};

static FORM_ENTRY: CandidateRule = CandidateRule::Include {
    categories: &["form"],
    names: &["Button", "Card"],
};

static COMPONENT_SHOWCASE: CandidateRule = CandidateRule::Exclude {
    categories: &["layout", "templates-patterns"],
};

static CUSTOM_BLANK: CandidateRule = CandidateRule::Include {
    categories: &["ui", "layout", "form", "data-display", "charts"],
    names: &[],
};

/// Canvases worth offering for this manifest, in display order.
///
/// Looks at the categories of components and layouts. The blank canvas is
/// always offered.
pub fn canvas_options(manifest: &Manifest) -> Vec<CanvasType> {
    let categories: BTreeSet<&str> = manifest
        .components
        .iter()
        .chain(&manifest.layouts)
        .map(|entry| entry.category.as_str())
        .collect();

    CanvasType::ALL
        .into_iter()
        .filter(|canvas| match canvas.offered_for() {
            Some(wanted) => wanted.iter().any(|category| categories.contains(*category)),
            None => true,
        })
        .collect()
}

/// Components offered for `canvas`, sorted by name.
pub fn candidates(canvas: CanvasType, manifest: &Manifest) -> Vec<&CatalogEntry> {
    let mut candidates: Vec<&CatalogEntry> = manifest
        .components
        .iter()
        .filter(|entry| canvas.admits(entry))
        .collect();
    candidates.sort_by(|a, b| a.name.cmp(&b.name));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockprint_catalog::Collection;

    fn entry(name: &str, category: &str) -> CatalogEntry {
        let mut entry = CatalogEntry::new(name);
        entry.category = category.to_string();
        entry
    }

    fn manifest() -> Manifest {
        let mut manifest = Manifest::default();
        for (name, category) in [
            ("Table", "data"),
            ("StatCard", "widgets"),
            ("LineChart", "charts"),
            ("Button", "ui"),
            ("Input", "form"),
            ("PageHeader", "templates-patterns"),
            ("Alert", "feedback"),
        ] {
            manifest.push(Collection::Components, entry(name, category));
        }
        manifest.push(Collection::Layouts, entry("DefaultLayout", "layout"));
        manifest
    }

    fn names(entries: Vec<&CatalogEntry>) -> Vec<&str> {
        entries.into_iter().map(|entry| entry.name.as_str()).collect()
    }

    #[test]
    fn candidate_table() {
        let manifest = manifest();
        assert_eq!(
            names(candidates(CanvasType::Dashboard, &manifest)),
            vec!["LineChart", "StatCard"]
        );
        assert_eq!(names(candidates(CanvasType::DataDisplay, &manifest)), vec!["Table"]);
        assert_eq!(
            names(candidates(CanvasType::FormEntry, &manifest)),
            vec!["Button", "Input"]
        );
        assert_eq!(
            names(candidates(CanvasType::ComponentShowcase, &manifest)),
            vec!["Alert", "Button", "Input", "LineChart", "StatCard", "Table"]
        );
        assert_eq!(
            names(candidates(CanvasType::CustomBlank, &manifest)),
            vec!["Button", "Input", "LineChart"]
        );
    }

    #[test]
    fn options_follow_present_categories() {
        let manifest = manifest();
        assert_eq!(
            canvas_options(&manifest),
            vec![
                CanvasType::Dashboard,
                CanvasType::FormEntry,
                CanvasType::ComponentShowcase,
                CanvasType::CustomBlank,
            ]
        );
        assert_eq!(
            canvas_options(&Manifest::default()),
            vec![CanvasType::CustomBlank]
        );
    }

    #[test]
    fn parses_ids() {
        assert_eq!("form-entry".parse::<CanvasType>().unwrap(), CanvasType::FormEntry);
        assert_eq!(" Dashboard ".parse::<CanvasType>().unwrap(), CanvasType::Dashboard);
        assert!("landing".parse::<CanvasType>().is_err());
        assert_eq!(
            serde_json::to_string(&CanvasType::ComponentShowcase).unwrap(),
            "\"component-showcase\""
        );
    }
}
