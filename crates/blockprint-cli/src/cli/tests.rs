#[cfg(test)]
mod tests {
    use crate::cli::validation::parse_boilerplate;
    use crate::cli::{ArtifactFormatArg, Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_boilerplate() {
        assert_eq!(parse_boilerplate("Fanta"), Ok("Fanta".to_string()));
        assert_eq!(parse_boilerplate("  Next.js starter "), Ok("Next.js starter".to_string()));
        assert_eq!(
            parse_boilerplate("   ").unwrap_err(),
            "Boilerplate name cannot be empty"
        );
        assert!(parse_boilerplate("two\nlines").is_err());
    }

    #[test]
    fn test_format_enum_values() {
        use clap::ValueEnum;

        let formats: Vec<_> = ArtifactFormatArg::value_variants()
            .iter()
            .map(|v| v.to_possible_value().unwrap().get_name().to_string())
            .collect();
        assert_eq!(formats, vec!["typescript", "json"]);
    }

    #[test]
    fn test_cli_verbose_quiet_conflict() {
        let result = Cli::try_parse_from(["blockprint", "--verbose", "--quiet", "check"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_args() {
        let args = Cli::try_parse_from([
            "blockprint",
            "generate",
            "--base",
            "app/src",
            "--format",
            "ts",
        ])
        .unwrap();

        if let Command::Generate(generate) = args.command {
            assert_eq!(generate.base, Some(PathBuf::from("app/src")));
            assert_eq!(generate.format, Some(ArtifactFormatArg::Typescript));
            assert!(generate.output.is_none());
            assert!(generate.config.is_none());
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_reference_manifest_conflicts_with_config() {
        let result = Cli::try_parse_from([
            "blockprint",
            "reference",
            "--manifest",
            "manifest.json",
            "--config",
            "blockprint.config.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_wizard_args() {
        let args = Cli::try_parse_from([
            "blockprint",
            "--no-color",
            "wizard",
            "--answers",
            "answers.json",
            "--out-dir",
            "out",
            "--boilerplate",
            "Vite",
        ])
        .unwrap();

        assert!(args.no_color);
        if let Command::Wizard(wizard) = args.command {
            assert_eq!(wizard.answers, Some(PathBuf::from("answers.json")));
            assert_eq!(wizard.out_dir, Some(PathBuf::from("out")));
            assert_eq!(wizard.boilerplate.as_deref(), Some("Vite"));
        } else {
            panic!("Expected Wizard command");
        }
    }

    #[test]
    fn test_wizard_rejects_blank_boilerplate() {
        let result = Cli::try_parse_from(["blockprint", "wizard", "--boilerplate", " "]);
        assert!(result.is_err());
    }
}
