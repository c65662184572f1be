//! Serializing the manifest to its artifact file and reading it back.

use std::fs;
use std::path::Path;

use crate::config::{ArtifactFormat, PipelineConfig};
use crate::error::{CatalogError, Result};
use crate::generators::json::render_json;
use crate::generators::typescript::{render_typescript, TypescriptOptions};
use crate::model::Manifest;

/// Render the artifact text in the configured format.
pub fn render_artifact(manifest: &Manifest, config: &PipelineConfig) -> Result<String> {
    match config.format {
        ArtifactFormat::Typescript => render_typescript(
            manifest,
            &TypescriptOptions {
                export_name: config.export_name.clone(),
                type_import: config.type_import.clone(),
            },
        ),
        ArtifactFormat::Json => render_json(manifest),
    }
}

/// Replace the artifact at `path`, creating parent directories as needed.
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    let write_error = |error: std::io::Error| CatalogError::Write {
        path: path.to_path_buf(),
        error,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, contents).map_err(write_error)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "artifact written");
    Ok(())
}

/// Read an artifact file from disk.
pub fn load_artifact(path: &Path) -> Result<Manifest> {
    let text = fs::read_to_string(path).map_err(|error| CatalogError::Io {
        path: path.to_path_buf(),
        error,
    })?;
    Manifest::from_artifact(&text)
}

impl Manifest {
    /// Decode either artifact form.
    ///
    /// Plain JSON is read as-is. A TypeScript module is reduced to the
    /// initializer of its first `export const` before decoding.
    pub fn from_artifact(text: &str) -> Result<Manifest> {
        let trimmed = text.trim();
        let json = if trimmed.starts_with('{') {
            trimmed
        } else {
            typescript_initializer(trimmed)?
        };
        serde_json::from_str(json)
            .map_err(|error| CatalogError::invalid_artifact(error.to_string()))
    }
}

fn typescript_initializer(text: &str) -> Result<&str> {
    let export = text
        .find("export const")
        .ok_or_else(|| CatalogError::invalid_artifact("no `export const` declaration"))?;
    let assign = text[export..]
        .find('=')
        .ok_or_else(|| CatalogError::invalid_artifact("export has no initializer"))?;

    let initializer = text[export + assign + 1..].trim();
    let initializer = initializer.strip_suffix(';').unwrap_or(initializer).trim_end();
    let initializer = initializer
        .strip_suffix("as const")
        .unwrap_or(initializer)
        .trim_end();
    Ok(initializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CatalogEntry, Collection, PropSpec};

    fn sample() -> Manifest {
        let mut button = CatalogEntry::new("Button");
        button.props.push(PropSpec::new("size", "'sm' | 'lg'", "Size.").with_default("sm"));
        let mut manifest = Manifest::default();
        manifest.push(Collection::Components, button);
        manifest
    }

    #[test]
    fn loads_both_forms() {
        let manifest = sample();
        for format in [ArtifactFormat::Typescript, ArtifactFormat::Json] {
            let config = PipelineConfig {
                format,
                ..PipelineConfig::default()
            };
            let text = render_artifact(&manifest, &config).unwrap();
            assert_eq!(Manifest::from_artifact(&text).unwrap(), manifest);
        }
    }

    #[test]
    fn rejects_modules_without_export() {
        let error = Manifest::from_artifact("import x from 'y';").unwrap_err();
        assert!(matches!(error, CatalogError::InvalidArtifact { .. }));
    }

    #[test]
    fn write_replaces_previous_content() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested/dir/wizardManifest.ts");
        write_artifact(&path, "first version, longer than the second").unwrap();
        write_artifact(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(load_artifact(&temp.path().join("missing.ts")).is_err());
    }
}
