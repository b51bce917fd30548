use super::RequestsLoggingLevel;
use crate::analysis::RangePolicy;

/// Request bodies carry avatars as data URLs.
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    pub bind_address: String,
    pub range_policy: RangePolicy,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 5000,
            bind_address: "127.0.0.1".to_owned(),
            range_policy: RangePolicy::Permissive,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}
