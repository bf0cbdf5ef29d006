//! # MID Core
//!
//! Core business logic and domain layer for the Mobile-ID authentication demo.
//! This crate contains domain entities, the authentication service, the
//! collaborator traits it depends on, session storage and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
