//! Configuration of one extraction run.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::extractor::DEFAULT_MARKER;
use crate::model::Collection;

/// Serialization form of the generated artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    /// A TypeScript module exporting a typed constant.
    #[default]
    Typescript,
    /// Plain pretty-printed JSON.
    Json,
}

/// A directory walked recursively into one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RootConfig {
    /// Directory relative to `base`.
    pub path: PathBuf,
    pub collection: Collection,
}

/// How a special-case file is turned into an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Strategy {
    /// First marker block of the file.
    Annotated,
    /// Marker block number `index` (zero-based), extracted on its own.
    #[serde(rename_all = "camelCase")]
    NthBlock { index: usize },
    /// Fixed descriptor emitted whenever the file exists.
    #[serde(rename_all = "camelCase")]
    Static {
        name: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        tags: Vec<String>,
        category: String,
        #[serde(default)]
        available_data: Vec<String>,
    },
}

/// A single file extracted outside of the generic walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpecialCase {
    /// File relative to `base`.
    pub path: PathBuf,
    pub collection: Collection,
    pub strategy: Strategy,
    /// Drop the result when the extracted name differs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect_name: Option<String>,
}

impl SpecialCase {
    pub fn new(path: impl Into<PathBuf>, collection: Collection, strategy: Strategy) -> Self {
        Self {
            path: path.into(),
            collection,
            strategy,
            expect_name: None,
        }
    }

    pub fn expecting(mut self, name: impl Into<String>) -> Self {
        self.expect_name = Some(name.into());
        self
    }
}

/// Everything the aggregator needs to produce a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    /// Directory that roots, special cases and `filePath` values are relative to.
    #[serde(default = "default_base")]
    pub base: PathBuf,

    /// Artifact destination.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub format: ArtifactFormat,

    /// Token that must open an annotation block.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Source file extensions, without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Name of the exported constant in TypeScript artifacts.
    #[serde(default = "default_export_name")]
    pub export_name: String,

    /// Module the `WizardManifest` type is imported from.
    #[serde(default = "default_type_import")]
    pub type_import: String,

    #[serde(default = "default_roots")]
    pub roots: Vec<RootConfig>,

    #[serde(default = "default_special_cases")]
    pub special_cases: Vec<SpecialCase>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            output: default_output(),
            format: ArtifactFormat::default(),
            marker: default_marker(),
            extensions: default_extensions(),
            export_name: default_export_name(),
            type_import: default_type_import(),
            roots: default_roots(),
            special_cases: default_special_cases(),
        }
    }
}

impl PipelineConfig {
    /// Whether `extension` (without the dot) names a source file.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|candidate| candidate == extension)
    }
}

pub fn default_base() -> PathBuf {
    PathBuf::from("src")
}

pub fn default_output() -> PathBuf {
    PathBuf::from("src/wizardManifest.ts")
}

pub fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

pub fn default_extensions() -> Vec<String> {
    vec!["ts".to_string(), "tsx".to_string()]
}

pub fn default_export_name() -> String {
    "wizardManifest".to_string()
}

pub fn default_type_import() -> String {
    "./types/wizard".to_string()
}

pub fn default_roots() -> Vec<RootConfig> {
    vec![RootConfig {
        path: PathBuf::from("components"),
        collection: Collection::Components,
    }]
}

pub fn default_special_cases() -> Vec<SpecialCase> {
    vec![
        SpecialCase::new(
            "layouts/DefaultLayout.tsx",
            Collection::Layouts,
            Strategy::Annotated,
        ),
        SpecialCase::new(
            "contexts/ThemeContext.tsx",
            Collection::Utils,
            Strategy::Annotated,
        )
        .expecting("ThemeProvider"),
        SpecialCase::new(
            "contexts/ThemeContext.tsx",
            Collection::Hooks,
            Strategy::NthBlock { index: 1 },
        )
        .expecting("useTheme"),
        SpecialCase::new("hooks/useDataFetch.ts", Collection::Hooks, Strategy::Annotated),
        SpecialCase::new(
            "data/mockData.ts",
            Collection::Data,
            Strategy::Static {
                name: "Mock Data Sets".to_string(),
                description: "Pre-defined datasets for prototyping tables, charts, and other data-driven components.".to_string(),
                tags: vec!["data".to_string(), "mock".to_string(), "example".to_string()],
                category: "data".to_string(),
                available_data: vec![
                    "mockTableData".to_string(),
                    "mockChartData".to_string(),
                    "mockPieChartData".to_string(),
                    "mockLargeTableData".to_string(),
                ],
            },
        ),
    ]
}
