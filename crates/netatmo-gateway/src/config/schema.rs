use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use netatmo_core::error::{ExporterError, Result};

use crate::upstream::Credentials;

#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,

    pub http_port: u16,
    /// Empty means all interfaces.
    pub http_addr: String,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("username", &self.username),
            ("password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(ExporterError::Config(format!("{name} must not be empty")));
            }
        }
        if self.http_port == 0 {
            return Err(ExporterError::Config("http_port must be between 1 and 65535".into()));
        }
        if !(1..=300).contains(&self.upstream_timeout_secs) {
            return Err(ExporterError::Config(
                "upstream_timeout_secs must be between 1 and 300".into(),
            ));
        }
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(ExporterError::Config(
                "api_base_url must start with http:// or https://".into(),
            ));
        }
        Ok(())
    }

    /// Host part of the listen address.
    pub fn bind_host(&self) -> &str {
        match self.http_addr.trim() {
            "" => "0.0.0.0",
            host => host,
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

// Secrets stay out of logs.
impl fmt::Debug for ExporterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExporterConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("http_port", &self.http_port)
            .field("http_addr", &self.http_addr)
            .field("api_base_url", &self.api_base_url)
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .finish()
    }
}

fn default_api_base_url() -> String {
    "https://api.netatmo.com".into()
}
fn default_upstream_timeout_secs() -> u64 {
    10
}
