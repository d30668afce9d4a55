use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    Memory,
    JsonFile,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { backend: StorageBackend::Memory, data_dir: default_data_dir(), file_name: default_file_name() }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

fn default_data_dir() -> String { "data".into() }
fn default_file_name() -> String { "reviews.json".into() }

pub fn load_default() -> Result<AppConfig> {
    let _ = dotenvy::dotenv();
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| anyhow!("cannot read {path}: {e}"))?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.storage.normalize_from_env();
        self.storage.validate()
    }
}

impl StorageConfig {
    /// `STORAGE_DATA_DIR` overrides the configured directory.
    pub fn normalize_from_env(&mut self) {
        if let Ok(dir) = std::env::var("STORAGE_DATA_DIR") {
            if !dir.trim().is_empty() {
                self.data_dir = dir;
            }
        }
        self.data_dir = self.data_dir.trim().to_string();
        self.file_name = self.file_name.trim().to_string();
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend != StorageBackend::JsonFile {
            return Ok(());
        }
        if self.data_dir.is_empty() {
            return Err(anyhow!("storage.data_dir must not be empty for the json_file backend"));
        }
        if self.file_name.is_empty() || !self.file_name.ends_with(".json") {
            return Err(anyhow!("storage.file_name must be a non-empty *.json file name"));
        }
        if self.file_name.contains(['/', '\\']) {
            return Err(anyhow!("storage.file_name must not contain path separators"));
        }
        Ok(())
    }

    pub fn file_path(&self) -> PathBuf { PathBuf::from(&self.data_dir).join(&self.file_name) }
}
