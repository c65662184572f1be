//! Configuration system for blockprint with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod conversions;
mod defaults;
mod loading;
mod tests;
mod validation;

use blockprint_catalog::PipelineConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;

pub use defaults::*;
pub use validation::*;

/// Blockprint configuration - loaded from blockprint.config.json or CLI args.
///
/// Extraction settings sit at the top level of the file next to the wizard
/// settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlockprintConfig {
    /// Roots, special cases, marker and artifact settings.
    #[serde(flatten)]
    pub pipeline: PipelineConfig,

    /// Boilerplate named in the wizard's generation prompt
    #[serde(default = "default_boilerplate")]
    pub boilerplate: String,
}

impl Default for BlockprintConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            boilerplate: default_boilerplate(),
        }
    }
}

/// Values given on the command line; unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<blockprint_catalog::ArtifactFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boilerplate: Option<String>,
}

impl BlockprintConfig {
    /// Generate JSON Schema for blockprint.config.json.
    pub fn json_schema() -> Result<serde_json::Value> {
        let schema = schemars::schema_for!(BlockprintConfig);
        Ok(serde_json::to_value(schema)?)
    }

    /// Generate example blockprint.config.json content.
    pub fn example_config() -> Result<String> {
        let mut pipeline = PipelineConfig::default();
        pipeline.roots.push(blockprint_catalog::RootConfig {
            path: PathBuf::from("widgets"),
            collection: blockprint_catalog::Collection::Components,
        });
        Ok(serde_json::to_string_pretty(&Self {
            pipeline,
            boilerplate: default_boilerplate(),
        })?)
    }
}
