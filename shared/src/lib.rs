//! Shared utilities and common types for the Mobile-ID demo server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Utility functions (phone and identity code validation, masking)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment, LoggingConfig, MobileIdConfig, ServerConfig, SessionStoreConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::{identity, phone};
