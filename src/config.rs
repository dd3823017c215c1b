use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::common::constants::DEFAULT_BRAVO_COUNTRY;
use crate::common::error::{HubError, Result};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub feeds: FeedsConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct FeedsConfig {
    pub alpha_url: String,
    pub bravo_url: String,
    pub charlie_url: String,
    /// Country stamped onto every bravo record; that upstream never sends one
    #[serde(default = "default_bravo_country")]
    pub bravo_country: String,
}

fn default_bravo_country() -> String {
    DEFAULT_BRAVO_COUNTRY.to_string()
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_content = fs::read_to_string(path).map_err(|e| {
            HubError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}
