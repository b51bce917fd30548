mod file_config;

pub use file_config::FileConfig;

use crate::analysis::RangePolicy;
use crate::server::{RequestsLoggingLevel, ServerConfig, DEFAULT_MAX_BODY_BYTES};
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;
use std::time::Duration;

/// CLI arguments that can be overridden by the TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub db_path: Option<PathBuf>,
    pub port: u16,
    pub bind_address: String,
    pub logging_level: RequestsLoggingLevel,
    pub strict_rgb_range: bool,
    pub auth_token_ttl_days: u64,
    pub token_prune_interval_hours: u64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub port: u16,
    pub bind_address: String,
    pub logging_level: RequestsLoggingLevel,
    pub range_policy: RangePolicy,
    pub auth_token_ttl: Duration,
    /// Zero disables pruning.
    pub token_prune_interval: Duration,
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let db_path = file
            .db_path
            .map(PathBuf::from)
            .or_else(|| cli.db_path.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("db_path must be specified on the command line or in config file")
            })?;

        if db_path.is_dir() {
            bail!("db_path is a directory: {:?}", db_path);
        }
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                bail!("Database directory does not exist: {:?}", parent);
            }
        }

        let port = file.port.unwrap_or(cli.port);
        let bind_address = file
            .bind_address
            .unwrap_or_else(|| cli.bind_address.clone());

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let range_policy = if file.strict_rgb_range.unwrap_or(cli.strict_rgb_range) {
            RangePolicy::Strict
        } else {
            RangePolicy::Permissive
        };

        let auth_token_ttl_days = file.auth_token_ttl_days.unwrap_or(cli.auth_token_ttl_days);
        if auth_token_ttl_days == 0 {
            bail!("auth_token_ttl_days must be greater than zero");
        }

        let token_prune_interval_hours = file
            .token_prune_interval_hours
            .unwrap_or(cli.token_prune_interval_hours);

        let Some(auth_token_ttl) = auth_token_ttl_days
            .checked_mul(24 * 60 * 60)
            .map(Duration::from_secs)
        else {
            bail!("auth_token_ttl_days is too large: {}", auth_token_ttl_days);
        };
        let Some(token_prune_interval) = token_prune_interval_hours
            .checked_mul(60 * 60)
            .map(Duration::from_secs)
        else {
            bail!(
                "token_prune_interval_hours is too large: {}",
                token_prune_interval_hours
            );
        };

        Ok(AppConfig {
            db_path,
            port,
            bind_address,
            logging_level,
            range_policy,
            auth_token_ttl,
            token_prune_interval,
            max_body_bytes: file.max_body_bytes.unwrap_or(DEFAULT_MAX_BODY_BYTES),
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            port: self.port,
            bind_address: self.bind_address.clone(),
            range_policy: self.range_policy,
            max_body_bytes: self.max_body_bytes,
        }
    }
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_cli(temp_dir: &TempDir) -> CliConfig {
        CliConfig {
            db_path: Some(temp_dir.path().join("users.db")),
            port: 5000,
            bind_address: "127.0.0.1".to_string(),
            logging_level: RequestsLoggingLevel::Headers,
            strict_rgb_range: false,
            auth_token_ttl_days: 7,
            token_prune_interval_hours: 24,
        }
    }

    #[test]
    fn test_parse_logging_level() {
        assert!(matches!(
            parse_logging_level("none"),
            Some(RequestsLoggingLevel::None)
        ));
        assert!(matches!(
            parse_logging_level("body"),
            Some(RequestsLoggingLevel::Body)
        ));
        // Case insensitive
        assert!(matches!(
            parse_logging_level("PATH"),
            Some(RequestsLoggingLevel::Path)
        ));
        assert!(parse_logging_level("invalid").is_none());
    }

    #[test]
    fn test_resolve_cli_only() {
        let temp_dir = TempDir::new().unwrap();
        let cli = make_cli(&temp_dir);

        let config = AppConfig::resolve(&cli, None).unwrap();

        assert_eq!(config.db_path, temp_dir.path().join("users.db"));
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.logging_level, RequestsLoggingLevel::Headers);
        assert_eq!(config.range_policy, RangePolicy::Permissive);
        assert_eq!(config.auth_token_ttl, Duration::from_secs(7 * 86_400));
        assert_eq!(config.token_prune_interval, Duration::from_secs(24 * 3600));
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn test_file_overrides_cli() {
        let temp_dir = TempDir::new().unwrap();
        let cli = make_cli(&temp_dir);
        let file = FileConfig {
            db_path: Some(
                temp_dir
                    .path()
                    .join("other.db")
                    .to_string_lossy()
                    .into_owned(),
            ),
            port: Some(8080),
            bind_address: Some("0.0.0.0".to_string()),
            logging_level: Some("none".to_string()),
            strict_rgb_range: Some(true),
            auth_token_ttl_days: Some(1),
            token_prune_interval_hours: Some(0),
            max_body_bytes: Some(1024),
        };

        let config = AppConfig::resolve(&cli, Some(file)).unwrap();

        assert_eq!(config.db_path, temp_dir.path().join("other.db"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.logging_level, RequestsLoggingLevel::None);
        assert_eq!(config.range_policy, RangePolicy::Strict);
        assert_eq!(config.auth_token_ttl, Duration::from_secs(86_400));
        assert_eq!(config.token_prune_interval, Duration::ZERO);

        let server_config = config.server_config();
        assert_eq!(server_config.port, 8080);
        assert_eq!(server_config.range_policy, RangePolicy::Strict);
        assert_eq!(server_config.max_body_bytes, 1024);
    }

    #[test]
    fn test_invalid_file_logging_level_falls_back_to_cli() {
        let temp_dir = TempDir::new().unwrap();
        let cli = make_cli(&temp_dir);
        let file = FileConfig {
            logging_level: Some("loud".to_string()),
            ..Default::default()
        };
        let config = AppConfig::resolve(&cli, Some(file)).unwrap();
        assert_eq!(config.logging_level, RequestsLoggingLevel::Headers);
    }

    #[test]
    fn test_resolve_requires_db_path() {
        let cli = CliConfig {
            auth_token_ttl_days: 7,
            ..Default::default()
        };
        assert!(AppConfig::resolve(&cli, None).is_err());
    }

    #[test]
    fn test_resolve_rejects_missing_db_directory() {
        let cli = CliConfig {
            db_path: Some(PathBuf::from("/nonexistent/dir/users.db")),
            auth_token_ttl_days: 7,
            ..Default::default()
        };
        assert!(AppConfig::resolve(&cli, None).is_err());
    }

    #[test]
    fn test_resolve_rejects_overflowing_durations() {
        let temp_dir = TempDir::new().unwrap();
        let cli = CliConfig {
            auth_token_ttl_days: u64::MAX,
            ..make_cli(&temp_dir)
        };
        assert!(AppConfig::resolve(&cli, None).is_err());

        let file = FileConfig {
            token_prune_interval_hours: Some(u64::MAX / 60),
            ..Default::default()
        };
        assert!(AppConfig::resolve(&make_cli(&temp_dir), Some(file)).is_err());
    }

    #[test]
    fn test_resolve_rejects_zero_ttl() {
        let temp_dir = TempDir::new().unwrap();
        let cli = CliConfig {
            auth_token_ttl_days: 0,
            ..make_cli(&temp_dir)
        };
        assert!(AppConfig::resolve(&cli, None).is_err());
    }
}
