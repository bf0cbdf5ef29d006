//! Mobile-ID client configuration module

use serde::{Deserialize, Serialize};

/// Relying party UUID of the public Mobile-ID demo environment
pub const DEMO_RELYING_PARTY_UUID: &str = "00000000-0000-0000-0000-000000000000";

/// Relying party name of the public Mobile-ID demo environment
pub const DEMO_RELYING_PARTY_NAME: &str = "DEMO";

/// Base URL of the public Mobile-ID demo environment
pub const DEMO_HOST_URL: &str = "https://tsp.demo.sk.ee/mid-api";

/// Settings for the Mobile-ID client used by the authentication service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MobileIdConfig {
    /// Client implementation ("mock")
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Mobile-ID REST API base URL
    #[serde(default = "default_host_url")]
    pub host_url: String,

    /// Relying party UUID registered with the Mobile-ID service
    pub relying_party_uuid: String,

    /// Relying party name registered with the Mobile-ID service
    pub relying_party_name: String,

    /// Pause between two status requests in seconds
    #[serde(default = "default_polling_sleep_seconds")]
    pub polling_sleep_seconds: u64,

    /// Server side long polling timeout in seconds
    #[serde(default = "default_long_polling_timeout_seconds")]
    pub long_polling_timeout_seconds: u64,
}

impl Default for MobileIdConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            host_url: default_host_url(),
            relying_party_uuid: DEMO_RELYING_PARTY_UUID.to_string(),
            relying_party_name: DEMO_RELYING_PARTY_NAME.to_string(),
            polling_sleep_seconds: default_polling_sleep_seconds(),
            long_polling_timeout_seconds: default_long_polling_timeout_seconds(),
        }
    }
}

impl MobileIdConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: std::env::var("MID_PROVIDER").unwrap_or(defaults.provider),
            host_url: std::env::var("MID_HOST_URL").unwrap_or(defaults.host_url),
            relying_party_uuid: std::env::var("MID_RELYING_PARTY_UUID")
                .unwrap_or(defaults.relying_party_uuid),
            relying_party_name: std::env::var("MID_RELYING_PARTY_NAME")
                .unwrap_or(defaults.relying_party_name),
            polling_sleep_seconds: std::env::var("MID_POLLING_SLEEP_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.polling_sleep_seconds),
            long_polling_timeout_seconds: std::env::var("MID_LONG_POLLING_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.long_polling_timeout_seconds),
        }
    }

    /// Set the relying party credentials
    pub fn with_relying_party(mut self, uuid: impl Into<String>, name: impl Into<String>) -> Self {
        self.relying_party_uuid = uuid.into();
        self.relying_party_name = name.into();
        self
    }

    /// Set the polling sleep in seconds
    pub fn with_polling_sleep(mut self, seconds: u64) -> Self {
        self.polling_sleep_seconds = seconds;
        self
    }

    /// Check the settings for obvious mistakes
    pub fn validate(&self) -> Result<(), String> {
        if self.relying_party_uuid.trim().is_empty() {
            return Err("MID_RELYING_PARTY_UUID must not be empty".to_string());
        }
        if self.relying_party_name.trim().is_empty() {
            return Err("MID_RELYING_PARTY_NAME must not be empty".to_string());
        }
        if !self.host_url.starts_with("http://") && !self.host_url.starts_with("https://") {
            return Err(format!("MID_HOST_URL is not an http(s) URL: {}", self.host_url));
        }
        if self.long_polling_timeout_seconds > 120 {
            return Err("MID_LONG_POLLING_TIMEOUT_SECONDS must not exceed 120".to_string());
        }
        Ok(())
    }

    /// Whether the demo environment credentials are in use
    pub fn is_demo_relying_party(&self) -> bool {
        self.relying_party_uuid == DEMO_RELYING_PARTY_UUID
    }
}

fn default_provider() -> String {
    String::from("mock")
}

fn default_host_url() -> String {
    DEMO_HOST_URL.to_string()
}

fn default_polling_sleep_seconds() -> u64 {
    1
}

fn default_long_polling_timeout_seconds() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_demo_relying_party() {
        let config = MobileIdConfig::default();
        assert_eq!(config.provider, "mock");
        assert!(config.is_demo_relying_party());
        assert_eq!(config.relying_party_name, "DEMO");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_relying_party() {
        let config = MobileIdConfig::default().with_relying_party("", "DEMO");
        assert!(config.validate().is_err());

        let config = MobileIdConfig::default().with_relying_party(DEMO_RELYING_PARTY_UUID, " ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_host_and_timeout() {
        let mut config = MobileIdConfig::default();
        config.host_url = "tsp.demo.sk.ee".to_string();
        assert!(config.validate().is_err());

        let mut config = MobileIdConfig::default();
        config.long_polling_timeout_seconds = 300;
        assert!(config.validate().is_err());
    }
}
