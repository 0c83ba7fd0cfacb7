//! User service settings: defaults overlaid with `TASKDESK_USERS__*`
//! environment variables (e.g. `TASKDESK_USERS__DATABASE__PASSWORD`).

use std::time::Duration;

use config::{Config, ConfigError, Environment};
use secrecy::SecretString;
use serde::Deserialize;
use taskdesk_shared::settings::{AuthSettings, ServerSettings};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub auth: AuthSettings,
    pub database: DatabaseSettings,
}

/// Postgres connection settings.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    pub name: String,
    /// libpq-style mode: `disable`, `prefer`, `require`, ...
    pub ssl_mode: String,
    pub max_connections: u32,
    pub exec_timeout_secs: u64,
}

impl DatabaseSettings {
    pub fn exec_timeout(&self) -> Duration {
        Duration::from_secs(self.exec_timeout_secs)
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_env_prefix("TASKDESK_USERS")
    }

    fn from_env_prefix(prefix: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.shutdown_timeout_secs", 5)?
            .set_default("server.request_timeout_secs", 10)?
            .set_default("auth.api_key", "secret12345")?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5433)?
            .set_default("database.username", "postgres")?
            .set_default("database.password", "")?
            .set_default("database.name", "mydb")?
            .set_default("database.ssl_mode", "disable")?
            .set_default("database.max_connections", 10)?
            .set_default("database.exec_timeout_secs", 5)?
            .add_source(Environment::with_prefix(prefix).separator("__"))
            .build()?
            .try_deserialize()
    }
}
