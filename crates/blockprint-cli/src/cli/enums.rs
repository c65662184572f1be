use clap::ValueEnum;

/// Serialization form of the manifest artifact
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ArtifactFormatArg {
    /// TypeScript module exporting a typed constant
    ///
    /// Imports `WizardManifest` from the configured type module and exports
    /// the manifest `as const`.
    #[value(name = "typescript", alias = "ts")]
    Typescript,

    /// Plain pretty-printed JSON
    #[value(name = "json")]
    Json,
}
