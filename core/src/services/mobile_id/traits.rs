//! Traits for the external Mobile-ID client and response validator

use async_trait::async_trait;

use crate::domain::entities::{AuthenticationSessionInfo, UserRequest};
use crate::domain::value_objects::{
    AuthenticationHash, AuthenticationIdentity, AuthenticationRequest, AuthenticationResponse,
    AuthenticationResult, MobileIdAuthentication, SessionStatus,
};
use crate::errors::{MidAuthError, MobileIdError};

/// Submits authentication requests to Mobile-ID
#[async_trait]
pub trait MobileIdConnector: Send + Sync {
    /// Start an authentication session and return its id
    async fn authenticate(
        &self,
        request: &AuthenticationRequest,
    ) -> Result<AuthenticationResponse, MobileIdError>;
}

/// Waits for an authentication session to finish
#[async_trait]
pub trait SessionStatusPoller: Send + Sync {
    /// Poll `path` (with `{sessionId}` substituted) until the session is final
    async fn fetch_final_session_status(
        &self,
        session_id: &str,
        path: &str,
    ) -> Result<SessionStatus, MobileIdError>;
}

/// Client exposing the relying party identity and the Mobile-ID endpoints
pub trait MobileIdClient: Send + Sync {
    fn relying_party_uuid(&self) -> &str;

    fn relying_party_name(&self) -> &str;

    fn mobile_id_connector(&self) -> &dyn MobileIdConnector;

    fn session_status_poller(&self) -> &dyn SessionStatusPoller;

    /// Turn a final session status into an authentication ready for validation
    fn create_mobile_id_authentication(
        &self,
        status: &SessionStatus,
        hash: &AuthenticationHash,
    ) -> Result<MobileIdAuthentication, MobileIdError> {
        MobileIdAuthentication::from_session_status(status, hash)
    }
}

/// Checks a completed authentication and extracts the identity
pub trait AuthenticationResponseValidator: Send + Sync {
    fn validate(&self, authentication: &MobileIdAuthentication) -> AuthenticationResult;
}

/// The two-step login flow as seen by the HTTP layer
#[async_trait]
pub trait AuthenticationServiceTrait: Send + Sync {
    /// Create a fresh session for the user; performs no network calls
    fn start_authentication(&self, user_request: UserRequest) -> AuthenticationSessionInfo;

    /// Run the Mobile-ID authentication for a started session
    async fn authenticate(
        &self,
        session_info: &AuthenticationSessionInfo,
    ) -> Result<AuthenticationIdentity, MidAuthError>;
}
