//! Task service settings: built-in defaults overlaid with `TASKDESK__*`
//! environment variables (e.g. `TASKDESK__SERVER__PORT=9000`).

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use taskdesk_shared::settings::{AuthSettings, ServerSettings};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub auth: AuthSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_env_prefix("TASKDESK")
    }

    fn from_env_prefix(prefix: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.shutdown_timeout_secs", 5)?
            .set_default("server.request_timeout_secs", 10)?
            .set_default("auth.api_key", "secret12345")?
            .add_source(Environment::with_prefix(prefix).separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn defaults_apply_without_environment() {
        let settings = Settings::from_env_prefix("TASKDESK_TEST_UNSET").unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.shutdown_timeout_secs, 5);
        assert_eq!(settings.server.request_timeout_secs, 10);
        assert_eq!(settings.auth.api_key.expose_secret(), "secret12345");
    }
}
