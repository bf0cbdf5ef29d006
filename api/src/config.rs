use mid_shared::config::{
    AppConfig, Environment, LoggingConfig, MobileIdConfig, ServerConfig, SessionStoreConfig,
};
use serde::{Deserialize, Serialize};

/// Configuration could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub mobile_id: MobileIdConfig,
    pub session: SessionStoreConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_app_config(AppConfig::from_env())
    }

    /// Validate an already assembled configuration
    pub fn from_app_config(app: AppConfig) -> Result<Self, ConfigError> {
        app.validate().map_err(ConfigError::Invalid)?;

        Ok(Config {
            environment: app.environment,
            server: app.server,
            mobile_id: app.mobile_id,
            session: app.session,
            logging: app.logging,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    pub fn bind_address(&self) -> String {
        self.server.bind_address()
    }
}
