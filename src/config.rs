//! Configuration management and validation.
//!
//! Provides the transport configuration for the KMA APIHUB endpoint.
//! Configuration is passed into the transport at construction time; the
//! feed decoders themselves carry no configuration dependency.

use crate::constants::{AUTH_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Transport configuration for the KMA APIHUB typ01 endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KmaConfig {
    /// Base endpoint URL, without a trailing slash
    pub base_url: String,

    /// APIHUB auth key appended to every request
    pub auth_key: String,

    /// Upstream request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for KmaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl KmaConfig {
    /// Create a configuration with the given auth key and defaults elsewhere
    pub fn with_auth_key(auth_key: impl Into<String>) -> Self {
        Self {
            auth_key: auth_key.into(),
            ..Self::default()
        }
    }

    /// Read the auth key from the environment, if set
    pub fn auth_key_from_env() -> Option<String> {
        std::env::var(AUTH_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::configuration("Base URL cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::configuration(format!(
                "Base URL must be an http(s) URL: {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(Error::configuration(
                "Request timeout must be greater than 0 seconds",
            ));
        }

        Ok(())
    }
}
