//! Mobile-ID authentication service implementation

use async_trait::async_trait;
use std::sync::Arc;

use mid_shared::utils::{identity::mask_identity_code, phone::mask_phone_number};

use crate::domain::entities::{AuthenticationSessionInfo, UserRequest};
use crate::domain::value_objects::{
    AuthenticationHash, AuthenticationIdentity, AuthenticationRequest, AuthenticationResult,
    RelyingParty,
};
use crate::errors::{MidAuthError, MobileIdError};

use super::config::{AuthenticationServiceConfig, AUTHENTICATION_SESSION_STATUS_PATH};
use super::traits::{
    AuthenticationResponseValidator, AuthenticationServiceTrait, MobileIdClient,
};

/// Two-phase Mobile-ID login: create a session, then authenticate it
pub struct MobileIdAuthenticationService<C, V>
where
    C: MobileIdClient + ?Sized,
    V: AuthenticationResponseValidator + ?Sized,
{
    /// Mobile-ID client providing connector and poller
    client: Arc<C>,
    /// Validator for completed authentications
    validator: Arc<V>,
    /// Service configuration
    config: AuthenticationServiceConfig,
}

impl<C, V> MobileIdAuthenticationService<C, V>
where
    C: MobileIdClient + ?Sized,
    V: AuthenticationResponseValidator + ?Sized,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `client` - Mobile-ID client implementation
    /// * `validator` - Response validator implementation
    /// * `config` - Service configuration
    pub fn new(client: Arc<C>, validator: Arc<V>, config: AuthenticationServiceConfig) -> Self {
        Self {
            client,
            validator,
            config,
        }
    }

    /// Start an authentication session
    ///
    /// Generates a random hash of the default type and binds it, together
    /// with its verification code, to the user request. No network call is
    /// made; the verification code should be shown to the user right away.
    pub fn start_authentication(&self, user_request: UserRequest) -> AuthenticationSessionInfo {
        let authentication_hash = AuthenticationHash::generate_random_of_default_type();
        let session_info = AuthenticationSessionInfo::new(user_request, authentication_hash);

        tracing::info!(
            phone = %mask_phone_number(session_info.user_request().phone_number()),
            hash_type = %session_info.authentication_hash().hash_type(),
            event = "mid_session_started",
            "Started Mobile-ID authentication session"
        );

        session_info
    }

    /// Complete an authentication session
    ///
    /// This method:
    /// 1. Builds the authentication request from the relying party and session data
    /// 2. Submits it through the connector
    /// 3. Waits for the final session status
    /// 4. Validates the resulting authentication
    ///
    /// # Returns
    ///
    /// * `Ok(AuthenticationIdentity)` - The identity produced by the validator
    /// * `Err(MidAuthError::Failed)` - Any step failed; the cause is wrapped
    /// * `Err(MidAuthError::InvalidResult)` - The validator rejected the response
    pub async fn authenticate(
        &self,
        session_info: &AuthenticationSessionInfo,
    ) -> Result<AuthenticationIdentity, MidAuthError> {
        let user_request = session_info.user_request();

        let result = self.complete_session(session_info).await.map_err(|e| {
            let phone = mask_phone_number(user_request.phone_number());
            if e.is_user_error() {
                tracing::info!(
                    phone = %phone,
                    error = %e,
                    event = "mid_authentication_refused",
                    "Mobile-ID authentication ended on the user's side"
                );
            } else {
                tracing::warn!(
                    phone = %phone,
                    error = %e,
                    event = "mid_authentication_failed",
                    "Mobile-ID authentication failed"
                );
            }
            MidAuthError::Failed(e)
        })?;

        if !result.is_valid() {
            tracing::warn!(
                phone = %mask_phone_number(user_request.phone_number()),
                errors = ?result.errors,
                event = "mid_authentication_invalid",
                "Mobile-ID authentication response did not pass validation"
            );
            return Err(MidAuthError::InvalidResult {
                errors: result.errors,
            });
        }

        match result.identity {
            Some(identity) => {
                tracing::info!(
                    identity_code = %mask_identity_code(&identity.identity_code),
                    country = %identity.country,
                    event = "mid_authentication_succeeded",
                    "Mobile-ID authentication succeeded"
                );
                Ok(identity)
            }
            None => Err(MidAuthError::InvalidResult {
                errors: vec!["Validator returned no authentication identity".to_string()],
            }),
        }
    }

    /// Run the session against Mobile-ID and validate the outcome
    async fn complete_session(
        &self,
        session_info: &AuthenticationSessionInfo,
    ) -> Result<AuthenticationResult, MobileIdError> {
        if !session_info.is_consistent() {
            return Err(MobileIdError::SessionIntegrity);
        }

        let authentication_hash = session_info.authentication_hash();
        let relying_party = RelyingParty {
            uuid: self.client.relying_party_uuid().to_string(),
            name: self.client.relying_party_name().to_string(),
        };
        let request = AuthenticationRequest::new(
            &relying_party,
            session_info.user_request(),
            authentication_hash,
            &self.config.display_settings(),
        )?;

        let response = self.client.mobile_id_connector().authenticate(&request).await?;

        tracing::debug!(
            session_id = %response.session_id,
            event = "mid_session_submitted",
            "Mobile-ID authentication request accepted, waiting for final status"
        );

        let session_status = self
            .client
            .session_status_poller()
            .fetch_final_session_status(&response.session_id, AUTHENTICATION_SESSION_STATUS_PATH)
            .await?;

        let authentication = self
            .client
            .create_mobile_id_authentication(&session_status, authentication_hash)?;

        Ok(self.validator.validate(&authentication))
    }
}

#[async_trait]
impl<C, V> AuthenticationServiceTrait for MobileIdAuthenticationService<C, V>
where
    C: MobileIdClient + ?Sized,
    V: AuthenticationResponseValidator + ?Sized,
{
    fn start_authentication(&self, user_request: UserRequest) -> AuthenticationSessionInfo {
        MobileIdAuthenticationService::start_authentication(self, user_request)
    }

    async fn authenticate(
        &self,
        session_info: &AuthenticationSessionInfo,
    ) -> Result<AuthenticationIdentity, MidAuthError> {
        MobileIdAuthenticationService::authenticate(self, session_info).await
    }
}
