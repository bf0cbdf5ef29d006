//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `mobile_id` - Mobile-ID relying party and polling settings
//! - `server` - HTTP server and CORS configuration
//! - `session` - Storage for started authentication sessions

pub mod environment;
pub mod mobile_id;
pub mod server;
pub mod session;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::{Environment, LoggingConfig};
pub use mobile_id::MobileIdConfig;
pub use server::{CorsConfig, ServerConfig};
pub use session::{SessionBackend, SessionStoreConfig, MAX_SESSION_TTL_SECONDS};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Mobile-ID client configuration
    pub mobile_id: MobileIdConfig,

    /// Session store configuration
    pub session: SessionStoreConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            mobile_id: MobileIdConfig::from_env(),
            session: SessionStoreConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Validate the parts that can be checked without I/O
    pub fn validate(&self) -> Result<(), String> {
        self.mobile_id.validate()?;
        if self.session.ttl_seconds == 0 {
            return Err("SESSION_TTL_SECONDS must be greater than zero".to_string());
        }
        if self.session.ttl_seconds > MAX_SESSION_TTL_SECONDS {
            return Err(format!(
                "SESSION_TTL_SECONDS must not exceed {}",
                MAX_SESSION_TTL_SECONDS
            ));
        }
        if self.environment.is_production() && self.mobile_id.provider == "mock" {
            return Err("The mock Mobile-ID provider cannot be used in production".to_string());
        }
        Ok(())
    }
}
