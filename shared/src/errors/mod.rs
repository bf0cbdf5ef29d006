//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, validator errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const NOT_FOUND: &str = "not_found";
    pub const INTERNAL_ERROR: &str = "internal_error";
    pub const VALIDATION_ERROR: &str = "validation_error";
    pub const SESSION_NOT_FOUND: &str = "session_not_found";
    pub const AUTHENTICATION_FAILED: &str = "authentication_failed";
    pub const AUTHENTICATION_INVALID: &str = "authentication_invalid";
    pub const USER_CANCELLED: &str = "user_cancelled";
    pub const SESSION_TIMEOUT: &str = "session_timeout";
    pub const NOT_MID_CLIENT: &str = "not_mid_client";
    pub const PHONE_NOT_AVAILABLE: &str = "phone_not_available";
    pub const DELIVERY_ERROR: &str = "delivery_error";
    pub const INVALID_USER_CONFIGURATION: &str = "invalid_user_configuration";
    pub const SERVICE_UNAVAILABLE: &str = "service_unavailable";
}
