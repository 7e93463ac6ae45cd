//! Environment configuration for the server.

use std::collections::HashMap;

use crate::server::error::config::ConfigError;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
pub const FLEET_PORT: &str = "FLEET_PORT";
pub const FLEET_USERS: &str = "FLEET_USERS";

pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    /// Dashboard username to bcrypt password hash
    pub users: HashMap<String, String>,
}

impl Config {
    pub const DEFAULT_PORT: u16 = 8502;
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns `None` for unset variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let port = match lookup(FLEET_PORT) {
            Some(value) => value.trim().parse::<u16>().map_err(|e| ConfigError::invalid(FLEET_PORT, e))?,
            None => Self::DEFAULT_PORT,
        };

        let database_max_connections = match lookup(DATABASE_MAX_CONNECTIONS) {
            Some(value) => {
                let max = value
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| ConfigError::invalid(DATABASE_MAX_CONNECTIONS, e))?;

                if max == 0 {
                    return Err(ConfigError::invalid(DATABASE_MAX_CONNECTIONS, "must be at least 1"));
                }

                max
            }
            None => Self::DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url: required(DATABASE_URL)?,
            database_max_connections,
            port,
            users: parse_users(&required(FLEET_USERS)?)?,
        })
    }
}

/// Parse `user:hash,user:hash` pairs.
///
/// Bcrypt hashes contain `$` but never `:` or `,`, so splitting on the first colon is safe.
pub fn parse_users(raw: &str) -> Result<HashMap<String, String>, ConfigError> {
    let mut users = HashMap::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (username, hash) = entry
            .split_once(':')
            .map(|(u, h)| (u.trim(), h.trim()))
            .filter(|(u, h)| !u.is_empty() && !h.is_empty())
            .ok_or_else(|| ConfigError::MalformedUser(entry.to_string()))?;

        if users
            .insert(username.to_string(), hash.to_string())
            .is_some()
        {
            return Err(ConfigError::DuplicateUser(username.to_string()));
        }
    }

    if users.is_empty() {
        return Err(ConfigError::NoUsers);
    }

    Ok(users)
}
