/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "blockprint.config.json";

/// Prefix of environment variables merged over the config file.
pub const ENV_PREFIX: &str = "BLOCKPRINT_";

pub fn default_boilerplate() -> String {
    "Fanta".to_string()
}
