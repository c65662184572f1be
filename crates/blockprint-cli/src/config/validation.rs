use std::collections::HashSet;

use blockprint_catalog::Strategy;

use crate::config::BlockprintConfig;
use crate::error::{ConfigError, Result};

/// `exportName` ends up as `export const <name>`, so it must be a plain
/// JavaScript identifier.
pub fn validate_identifier(field: &str, name: &str) -> Result<()> {
    let is_part = |c: char| c.is_alphanumeric() || c == '_' || c == '$';

    let hint = match name.chars().next() {
        None => Some("Identifier cannot be empty".to_string()),
        Some(first) if first.is_numeric() || !is_part(first) => {
            Some(format!("'{first}' cannot start an identifier"))
        }
        Some(_) => name
            .chars()
            .find(|c| !is_part(*c))
            .map(|c| format!("'{c}' is not allowed in an identifier")),
    };

    match hint {
        Some(hint) => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: name.to_string(),
            hint,
        }
        .into()),
        None => Ok(()),
    }
}

impl BlockprintConfig {
    /// Checks that serde cannot express: marker shape, extension spelling,
    /// unique roots and complete static special cases.
    pub fn validate(&self) -> Result<()> {
        let pipeline = &self.pipeline;

        if !pipeline.marker.starts_with('@')
            || pipeline.marker.len() < 2
            || pipeline.marker.contains(char::is_whitespace)
        {
            return Err(ConfigError::InvalidValue {
                field: "marker".to_string(),
                value: pipeline.marker.clone(),
                hint: "Markers are a single '@' tag such as @wizard".to_string(),
            }
            .into());
        }

        if pipeline.extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "extensions".to_string(),
                value: "[]".to_string(),
                hint: "List at least one source extension, e.g. [\"ts\", \"tsx\"]".to_string(),
            }
            .into());
        }

        if let Some(extension) = pipeline
            .extensions
            .iter()
            .find(|extension| extension.is_empty() || extension.starts_with('.'))
        {
            return Err(ConfigError::InvalidValue {
                field: "extensions".to_string(),
                value: extension.clone(),
                hint: "Write extensions without the leading dot".to_string(),
            }
            .into());
        }

        validate_identifier("exportName", &pipeline.export_name)?;

        let mut seen = HashSet::new();
        for root in &pipeline.roots {
            if !seen.insert(&root.path) {
                return Err(ConfigError::Duplicate {
                    field: "root path".to_string(),
                    value: root.path.display().to_string(),
                }
                .into());
            }
        }

        for case in &pipeline.special_cases {
            if let Strategy::Static { name, category, .. } = &case.strategy {
                if name.trim().is_empty() || category.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: "specialCases".to_string(),
                        value: case.path.display().to_string(),
                        hint: "Static special cases need a name and a category".to_string(),
                    }
                    .into());
                }
            }
        }

        if self.boilerplate.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "boilerplate".to_string(),
                value: self.boilerplate.clone(),
                hint: "Name the boilerplate the prompt should target".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
