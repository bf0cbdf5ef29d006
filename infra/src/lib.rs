//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the Mobile-ID
//! authentication service depends on.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Mobile-ID**: development client and response validator, selected by provider
//! - **Session**: in-memory and Redis session stores, selected by backend
//!
//! ## Features
//!
//! - `redis-cache`: Enable the Redis session store (default)

// Re-export core types for convenience
pub use mid_core::errors::*;

/// Mobile-ID client module - connector, poller and response validation
pub mod mobile_id;

/// Session module - storage of authentication sessions between requests
pub mod session;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[cfg(feature = "redis-cache")]
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Stored value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::Internal {
            message: error.to_string(),
        }
    }
}
