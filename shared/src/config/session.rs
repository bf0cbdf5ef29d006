//! Session store configuration module

use serde::{Deserialize, Serialize};

/// Longest accepted session lifetime (one day)
pub const MAX_SESSION_TTL_SECONDS: u64 = 86_400;

/// Backing storage for pending authentication sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    /// Process-local map
    #[default]
    Memory,
    /// Redis, shared between instances
    Redis,
}

impl std::str::FromStr for SessionBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" => Ok(SessionBackend::Memory),
            "redis" => Ok(SessionBackend::Redis),
            _ => Err(format!("Unknown session store backend: {}", s)),
        }
    }
}

/// Session store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionStoreConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: SessionBackend,

    /// Redis connection URL (redis backend only)
    pub url: String,

    /// Lifetime of a started session in seconds
    #[serde(default = "default_ttl")]
    pub ttl_seconds: u64,

    /// Key prefix for stored sessions
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            backend: SessionBackend::Memory,
            url: String::from("redis://localhost:6379"),
            ttl_seconds: default_ttl(),
            key_prefix: default_key_prefix(),
        }
    }
}

impl SessionStoreConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend: std::env::var("SESSION_STORE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.backend),
            url: std::env::var("REDIS_URL").unwrap_or(defaults.url),
            ttl_seconds: std::env::var("SESSION_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ttl_seconds),
            key_prefix: std::env::var("SESSION_KEY_PREFIX").unwrap_or(defaults.key_prefix),
        }
    }

    /// Set the session lifetime
    pub fn with_ttl(mut self, seconds: u64) -> Self {
        self.ttl_seconds = seconds;
        self
    }

    /// Session lifetime capped at `MAX_SESSION_TTL_SECONDS`
    pub fn effective_ttl_seconds(&self) -> u64 {
        self.ttl_seconds.min(MAX_SESSION_TTL_SECONDS)
    }

    /// Build the storage key for a session token
    pub fn session_key(&self, token: &str) -> String {
        format!("{}:{}", self.key_prefix, token)
    }
}

fn default_ttl() -> u64 {
    300 // 5 minutes
}

fn default_key_prefix() -> String {
    String::from("mid:session")
}
