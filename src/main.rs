use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use beaukit_server::config::{AppConfig, CliConfig, FileConfig};
use beaukit_server::server::{run_server, RequestsLoggingLevel};
use beaukit_server::user::{SqliteUserStore, UserManager};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// SQLite file holding users, sessions and profiles. Created if missing.
    #[clap(value_parser = parse_path)]
    pub db_path: Option<PathBuf>,

    /// TOML file whose values override the command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    #[clap(short, long, default_value_t = 5000)]
    pub port: u16,

    #[clap(long, default_value = "127.0.0.1")]
    pub bind_address: String,

    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Reject RGB components outside [0, 255] instead of analyzing them as is.
    #[clap(long)]
    pub strict_rgb_range: bool,

    #[clap(long, default_value_t = 7)]
    pub auth_token_ttl_days: u64,

    /// How often expired auth tokens are purged, 0 disables it.
    #[clap(long, default_value_t = 24)]
    pub token_prune_interval_hours: u64,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            db_path: self.db_path.clone(),
            port: self.port,
            bind_address: self.bind_address.clone(),
            logging_level: self.logging_level.clone(),
            strict_rgb_range: self.strict_rgb_range,
            auth_token_ttl_days: self.auth_token_ttl_days,
            token_prune_interval_hours: self.token_prune_interval_hours,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    info!("Opening user database at {:?}...", config.db_path);
    let user_store = SqliteUserStore::new(&config.db_path)?;
    let user_manager = UserManager::new(Box::new(user_store.clone()), config.auth_token_ttl);

    if !config.token_prune_interval.is_zero() {
        let pruning_manager = UserManager::new(Box::new(user_store), config.auth_token_ttl);
        let interval = config.token_prune_interval;
        info!(
            "Auth token pruning enabled, every {} hours",
            interval.as_secs() / 3600
        );

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                match pruning_manager.purge_expired_auth_tokens() {
                    Ok(count) => {
                        if count > 0 {
                            info!("Pruned {} expired auth tokens", count);
                        }
                    }
                    Err(e) => {
                        error!("Failed to prune auth tokens: {}", e);
                    }
                }
            }
        });
    }

    if config.range_policy == beaukit_server::RangePolicy::Strict {
        info!("RGB components outside [0, 255] will be rejected");
    }

    run_server(config.server_config(), user_manager).await
}
