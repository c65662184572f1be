use crate::config::{BlockprintConfig, ConfigOverrides, CONFIG_FILE, ENV_PREFIX};
use crate::error::{ConfigError, Result};
use figment::{
    providers::{Env, Format as _, Json, Serialized},
    Figment,
};
use std::path::{Path, PathBuf};

impl BlockprintConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let config_file = Self::locate(config_path)?;
        match &config_file {
            Some(path) => tracing::debug!("Loading configuration from {}", path.display()),
            None => tracing::debug!("No {} found, using defaults", CONFIG_FILE),
        }

        let config: Self = Self::figment(config_file.as_deref(), overrides)
            .extract()
            .map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// The explicit config file, else `blockprint.config.json` when present.
    pub fn locate(config_path: Option<&Path>) -> Result<Option<PathBuf>> {
        match config_path {
            Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
            Some(path) => Err(ConfigError::NotFound(path.to_path_buf()).into()),
            None => {
                let default_path = Path::new(CONFIG_FILE);
                Ok(default_path.is_file().then(|| default_path.to_path_buf()))
            }
        }
    }

    fn figment(config_file: Option<&Path>, overrides: &ConfigOverrides) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_file {
            figment = figment.merge(Json::file(path));
        }

        // BLOCKPRINT_FORMAT -> format, BLOCKPRINT_EXPORT_NAME -> exportName
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .lowercase(false)
                .map(|key| env_key(key.as_str()).into()),
        );

        figment.merge(Serialized::defaults(overrides))
    }
}

/// `SPECIAL_CASES` -> `specialCases`, matching the camelCase config keys.
fn env_key(key: &str) -> String {
    let mut parts = key.split('_').filter(|part| !part.is_empty());
    let mut camel = parts.next().map(str::to_ascii_lowercase).unwrap_or_default();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            camel.push(first.to_ascii_uppercase());
            camel.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }
    camel
}
