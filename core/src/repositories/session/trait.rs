//! Session store trait for keeping authentication sessions between requests.

use async_trait::async_trait;

use crate::domain::entities::AuthenticationSessionInfo;
use crate::errors::DomainError;

/// Storage for authentication sessions keyed by an opaque session token
///
/// A session is written once after the start step and consumed once by the
/// completion step. Implementations expire sessions they hold for longer
/// than their configured lifetime.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a session under the given token, replacing any previous value
    async fn save(&self, token: &str, session: &AuthenticationSessionInfo)
        -> Result<(), DomainError>;

    /// Remove and return the session stored under the token
    ///
    /// # Returns
    /// * `Ok(Some(session))` - Session found; it is no longer stored
    /// * `Ok(None)` - Unknown or expired token
    /// * `Err(DomainError)` - Storage backend failure
    async fn take(&self, token: &str) -> Result<Option<AuthenticationSessionInfo>, DomainError>;

    /// Drop a session without reading it
    ///
    /// Returns whether a session was removed.
    async fn remove(&self, token: &str) -> Result<bool, DomainError>;
}
