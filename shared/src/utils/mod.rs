//! Common utility functions

pub mod identity;
pub mod phone;

// Re-export commonly used utilities
pub use identity::*;
pub use phone::*;
