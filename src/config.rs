use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NoshConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub food: FoodConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub transport: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FoodConfig {
    /// URL of the bulk food database dump fetched by `nosh db download`.
    pub source_url: String,
    /// Directory downloads land in before import.
    pub data_dir: String,
    /// Default result count for food search.
    pub search_limit: usize,
}

impl Default for NoshConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            food: FoodConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: "stdio".into(),
            host: "127.0.0.1".into(),
            port: 8722,
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_nosh_dir()
            .join("nosh.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

impl Default for FoodConfig {
    fn default() -> Self {
        let data_dir = default_nosh_dir()
            .join("data")
            .to_string_lossy()
            .into_owned();
        Self {
            source_url:
                "https://fdc.nal.usda.gov/fdc-datasets/FoodData_Central_foundation_food_json_2025-04-24.zip"
                    .into(),
            data_dir,
            search_limit: 10,
        }
    }
}

/// Returns `~/.nosh/`
pub fn default_nosh_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".nosh")
}

/// Returns the default config file path: `~/.nosh/config.toml`
pub fn default_config_path() -> PathBuf {
    default_nosh_dir().join("config.toml")
}

impl NoshConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            NoshConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (NOSH_DB, NOSH_LOG_LEVEL, NOSH_FOOD_URL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("NOSH_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("NOSH_LOG_LEVEL") {
            self.server.log_level = val;
        }
        if let Ok(val) = std::env::var("NOSH_FOOD_URL") {
            self.food.source_url = val;
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
