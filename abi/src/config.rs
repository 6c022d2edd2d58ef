use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// start with the two demo reservations
    #[serde(default)]
    pub seed_demo: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Config {
    pub fn load(filename: impl AsRef<Path>) -> Result<Self> {
        let filename = filename.as_ref();
        let config = fs::read_to_string(filename)
            .with_context(|| format!("failed to read config file {}", filename.display()))?;
        Self::parse(&config)
            .with_context(|| format!("failed to parse config file {}", filename.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_should_work() {
        let config = Config::load("../service/fixtures/config.yml").unwrap();
        assert_eq!(
            config,
            Config {
                store: StoreConfig { seed_demo: true },
                log: LogConfig {
                    level: "debug".to_string(),
                    json: false,
                },
            }
        )
    }

    #[test]
    fn empty_sections_should_use_defaults() {
        let config = Config::parse("store: {}\n").unwrap();
        assert!(!config.store.seed_demo);
        assert_eq!(config.log.level, "info");
        assert!(!config.log.json);
    }

    #[test]
    fn missing_config_file_should_reject() {
        let err = Config::load("../service/fixtures/nope.yml").unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
