use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional TOML config, every field overrides its CLI counterpart.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub db_path: Option<String>,
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub logging_level: Option<String>,
    pub strict_rgb_range: Option<bool>,
    pub auth_token_ttl_days: Option<u64>,
    pub token_prune_interval_hours: Option<u64>,
    pub max_body_bytes: Option<usize>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
