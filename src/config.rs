use std::env;
use std::net::SocketAddr;

use crate::error::ConfigError;

pub const DEFAULT_API_V1_STR: &str = "/api/v1";
pub const DEFAULT_DB_URL: &str = "sqlite://university.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Process settings, read once at startup and handed to the bootstrap.
///
/// Every field can be overridden by an environment variable of the same
/// (upper-case, case-sensitive) name.
#[derive(Clone, Debug)]
pub struct Settings {
    pub api_v1_str: String,
    pub db_url: String,
    pub bind_addr: SocketAddr,
    pub db_max_connections: u32,
}

impl Settings {
    pub fn new_from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_v1_str = lookup("API_V1_STR").unwrap_or_else(|| DEFAULT_API_V1_STR.to_string());
        let db_url = lookup("DB_URL").unwrap_or_else(|| DEFAULT_DB_URL.to_string());

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: "BIND_ADDR",
                value: bind_addr.clone(),
                reason: e.to_string(),
            })?;

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        key: "DB_MAX_CONNECTIONS",
                        value: raw,
                        reason: "must be at least 1".to_string(),
                    });
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: "DB_MAX_CONNECTIONS",
                        reason: e.to_string(),
                        value: raw,
                    });
                }
            },
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        Ok(Self {
            api_v1_str,
            db_url,
            bind_addr,
            db_max_connections,
        })
    }

    /// The API prefix with a leading slash and no trailing slash.
    /// An empty string means the API is mounted at the root.
    pub fn api_prefix(&self) -> String {
        let trimmed = self.api_v1_str.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        }
    }
}
