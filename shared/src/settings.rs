//! Settings fragments shared by the task and user services.
//!
//! Each service composes these into its own `Settings` and loads them with
//! the `config` crate from defaults plus prefixed environment variables.

use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;

/// HTTP binding and lifecycle settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Grace period for in-flight requests after SIGINT/SIGTERM.
    pub shutdown_timeout_secs: u64,
    /// Deadline for a client to send the request head.
    pub request_timeout_secs: u64,
}

impl ServerSettings {
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Shared-secret authentication settings.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    pub api_key: SecretString,
}
