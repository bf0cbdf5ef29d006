//! Error types for Mobile-ID authentication and input validation
//!
//! `MidAuthError` is the only error the authentication service returns from
//! the completion step. Everything that can go wrong underneath it is a
//! `MobileIdError` and stays reachable as the wrapped cause.

use thiserror::Error;

/// Validation errors
///
/// These errors represent malformed input for user requests or for the
/// Mobile-ID authentication request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field } | ValidationError::InvalidFormat { field } => {
                field
            }
        }
    }
}

/// Failures reported by the Mobile-ID client or detected while talking to it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MobileIdError {
    #[error("Invalid authentication request: {0}")]
    InvalidRequest(#[from] ValidationError),

    #[error("Relying party is not authorized")]
    Unauthorized,

    #[error("Session not found: {session_id}")]
    SessionNotFound { session_id: String },

    #[error("User did not respond in time")]
    SessionTimeout,

    #[error("User cancelled the operation")]
    UserCancelled,

    #[error("User is not a Mobile-ID client")]
    NotMidClient,

    #[error("Phone is not available")]
    PhoneNotAvailable,

    #[error("Message could not be delivered to the phone")]
    DeliveryError,

    #[error("SIM application error")]
    SimError,

    #[error("Signature hash does not match the requested hash")]
    SignatureHashMismatch,

    #[error("Session did not reach a final state: {state}")]
    IncompleteSession { state: String },

    #[error("Session status carries no signature")]
    MissingSignature,

    #[error("Verification code does not match the authentication hash")]
    SessionIntegrity,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MobileIdError {
    /// Whether the end user caused the failure (as opposed to configuration or transport)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            MobileIdError::SessionTimeout
                | MobileIdError::UserCancelled
                | MobileIdError::NotMidClient
                | MobileIdError::PhoneNotAvailable
                | MobileIdError::DeliveryError
                | MobileIdError::SimError
                | MobileIdError::SignatureHashMismatch
        )
    }
}

/// Mobile-ID authentication failure
///
/// Carries either the underlying cause or the validator's error list.
/// Callers tell causes apart by inspecting the payload, not by type.
#[derive(Error, Debug)]
pub enum MidAuthError {
    #[error("Mobile-ID authentication failed: {0}")]
    Failed(#[from] MobileIdError),

    #[error("Mobile-ID authentication result is invalid: {}", .errors.join("; "))]
    InvalidResult { errors: Vec<String> },
}

impl MidAuthError {
    /// The wrapped cause, when the failure came from the flow itself
    pub fn cause(&self) -> Option<&MobileIdError> {
        match self {
            MidAuthError::Failed(cause) => Some(cause),
            MidAuthError::InvalidResult { .. } => None,
        }
    }

    /// Errors reported by the response validator, empty otherwise
    pub fn errors(&self) -> &[String] {
        match self {
            MidAuthError::Failed(_) => &[],
            MidAuthError::InvalidResult { errors } => errors,
        }
    }
}
