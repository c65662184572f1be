use blockprint_catalog::ArtifactFormat;

use crate::cli::{ArtifactFormatArg, GenerateArgs};
use crate::config::ConfigOverrides;

// Conversion implementations: CLI args -> Config values

impl From<ArtifactFormatArg> for ArtifactFormat {
    fn from(f: ArtifactFormatArg) -> Self {
        match f {
            ArtifactFormatArg::Typescript => ArtifactFormat::Typescript,
            ArtifactFormatArg::Json => ArtifactFormat::Json,
        }
    }
}

impl From<&GenerateArgs> for ConfigOverrides {
    fn from(args: &GenerateArgs) -> Self {
        Self {
            base: args.base.clone(),
            output: args.output.clone(),
            format: args.format.map(Into::into),
            boilerplate: None,
        }
    }
}
