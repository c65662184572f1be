#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::{CliError, ConfigError};
    use blockprint_catalog::{ArtifactFormat, Collection, RootConfig, SpecialCase, Strategy};
    use figment::Jail;
    use std::path::{Path, PathBuf};

    fn load(overrides: &ConfigOverrides) -> Result<BlockprintConfig, figment::Error> {
        BlockprintConfig::load(None, overrides).map_err(|e| figment::Error::from(e.to_string()))
    }

    #[test]
    fn test_serialization() {
        let json_val = serde_json::to_value(BlockprintConfig::default()).unwrap();

        // Pipeline fields sit at the top level, camelCase
        assert_eq!(json_val["exportName"], "wizardManifest");
        assert_eq!(json_val["typeImport"], "./types/wizard");
        assert_eq!(json_val["format"], "typescript");
        assert_eq!(json_val["boilerplate"], "Fanta");
        assert!(json_val.get("pipeline").is_none());
        assert!(json_val.get("export_name").is_none());

        // skip_serializing_if on expectName
        assert!(json_val["specialCases"][0].get("expectName").is_none());
        assert_eq!(json_val["specialCases"][1]["expectName"], "ThemeProvider");
    }

    #[test]
    fn test_example_config_parses() {
        let example = BlockprintConfig::example_config().unwrap();
        let parsed: BlockprintConfig = serde_json::from_str(&example).unwrap();
        assert_eq!(parsed.pipeline.roots.len(), 2);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_json_schema_names_fields() {
        let schema = BlockprintConfig::json_schema().unwrap().to_string();
        assert!(schema.contains("specialCases"));
        assert!(schema.contains("boilerplate"));
    }

    #[test]
    fn test_validation() {
        assert!(BlockprintConfig::default().validate().is_ok());

        let mut config = BlockprintConfig::default();
        config.pipeline.marker = "wizard".to_string();
        assert!(config.validate().is_err());

        let mut config = BlockprintConfig::default();
        config.pipeline.extensions.clear();
        assert!(config.validate().is_err());

        let mut config = BlockprintConfig::default();
        config.pipeline.extensions = vec![".tsx".to_string()];
        assert!(config.validate().is_err());

        let mut config = BlockprintConfig::default();
        config.pipeline.export_name = "wizard-manifest".to_string();
        assert!(config.validate().is_err());

        let mut config = BlockprintConfig::default();
        config.boilerplate = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_roots_rejected() {
        let mut config = BlockprintConfig::default();
        config.pipeline.roots.push(RootConfig {
            path: PathBuf::from("components"),
            collection: Collection::Layouts,
        });

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_static_special_case_needs_name() {
        let mut config = BlockprintConfig::default();
        config.pipeline.special_cases = vec![SpecialCase::new(
            "data/mock.ts",
            Collection::Data,
            Strategy::Static {
                name: String::new(),
                description: String::new(),
                tags: vec![],
                category: "data".to_string(),
                available_data: vec![],
            },
        )];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("exportName", "wizardManifest").is_ok());
        assert!(validate_identifier("exportName", "$manifest_2").is_ok());
        assert!(validate_identifier("exportName", "").is_err());
        assert!(validate_identifier("exportName", "2manifest").is_err());
        assert!(validate_identifier("exportName", "my.manifest").is_err());
    }

    #[test]
    fn test_load_defaults_without_file() {
        Jail::expect_with(|_jail| {
            let config = load(&ConfigOverrides::default())?;
            assert_eq!(config, BlockprintConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_layers_file_env_and_cli() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"{
                    "base": "app",
                    "output": "app/manifest.ts",
                    "marker": "@block",
                    "roots": [{ "path": "widgets", "collection": "components" }],
                    "boilerplate": "Vite"
                }"#,
            )?;

            let config = load(&ConfigOverrides::default())?;
            assert_eq!(config.pipeline.base, PathBuf::from("app"));
            assert_eq!(config.pipeline.marker, "@block");
            assert_eq!(config.pipeline.roots[0].path, PathBuf::from("widgets"));
            assert_eq!(config.boilerplate, "Vite");
            // Unset fields keep their defaults
            assert_eq!(config.pipeline.export_name, "wizardManifest");
            assert_eq!(config.pipeline.special_cases.len(), 5);

            jail.set_env("BLOCKPRINT_FORMAT", "json");
            jail.set_env("BLOCKPRINT_OUTPUT", "env/manifest.json");
            jail.set_env("BLOCKPRINT_EXPORT_NAME", "componentManifest");
            jail.set_env("BLOCKPRINT_TYPE_IMPORT", "@app/wizard-types");
            let config = load(&ConfigOverrides::default())?;
            assert_eq!(config.pipeline.format, ArtifactFormat::Json);
            assert_eq!(config.pipeline.output, PathBuf::from("env/manifest.json"));
            assert_eq!(config.pipeline.export_name, "componentManifest");
            assert_eq!(config.pipeline.type_import, "@app/wizard-types");

            let overrides = ConfigOverrides {
                output: Some(PathBuf::from("cli/manifest.ts")),
                format: Some(ArtifactFormat::Typescript),
                ..ConfigOverrides::default()
            };
            let config = load(&overrides)?;
            assert_eq!(config.pipeline.format, ArtifactFormat::Typescript);
            assert_eq!(config.pipeline.output, PathBuf::from("cli/manifest.ts"));
            assert_eq!(config.pipeline.base, PathBuf::from("app"));
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, r#"{ "extensions": [] }"#)?;
            assert!(load(&ConfigOverrides::default()).is_err());

            jail.create_file(CONFIG_FILE, r#"{ "format": "yaml" }"#)?;
            assert!(load(&ConfigOverrides::default()).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let err = BlockprintConfig::load(
            Some(Path::new("/definitely/missing/blockprint.config.json")),
            &ConfigOverrides::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::NotFound(_))));
    }
}
