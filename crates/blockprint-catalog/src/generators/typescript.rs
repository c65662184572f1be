use std::fmt::Write;

use crate::error::Result;
use crate::model::Manifest;

/// First line of every generated TypeScript artifact.
pub const GENERATED_HEADER: &str =
    "// This file is auto-generated by `blockprint generate`. Do not modify it manually.";

/// Options for the TypeScript module wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypescriptOptions {
    /// Name of the exported constant.
    pub export_name: String,
    /// Module specifier the `WizardManifest` type is imported from.
    pub type_import: String,
}

impl Default for TypescriptOptions {
    fn default() -> Self {
        Self {
            export_name: "wizardManifest".to_string(),
            type_import: "./types/wizard".to_string(),
        }
    }
}

/// Render the manifest as a module exporting one typed constant.
pub fn render_typescript(manifest: &Manifest, options: &TypescriptOptions) -> Result<String> {
    let body = serde_json::to_string_pretty(manifest)?;

    let mut output = String::new();
    let _ = writeln!(output, "{GENERATED_HEADER}");
    let _ = writeln!(output, "// Regenerate it after editing annotation blocks.");
    output.push('\n');
    let _ = writeln!(
        output,
        "import type {{ WizardManifest }} from '{}';",
        options.type_import
    );
    output.push('\n');
    let _ = writeln!(
        output,
        "export const {}: WizardManifest = {body} as const;",
        options.export_name
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CatalogEntry, Collection};

    #[test]
    fn wraps_json_in_a_typed_export() {
        let mut manifest = Manifest::default();
        manifest.push(Collection::Layouts, CatalogEntry::new("DefaultLayout"));

        let output = render_typescript(&manifest, &TypescriptOptions::default()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], GENERATED_HEADER);
        assert_eq!(
            lines[3],
            "import type { WizardManifest } from './types/wizard';"
        );
        assert!(lines[5].starts_with("export const wizardManifest: WizardManifest = {"));
        assert!(output.ends_with("} as const;\n"));
        assert!(output.contains("\"name\": \"DefaultLayout\""));
    }
}
