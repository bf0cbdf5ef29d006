use mid_core::domain::value_objects::AuthenticationIdentity;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StartAuthenticationRequest {
    /// Phone number in international format, e.g. "+37200000766"
    #[validate(length(min = 1, max = 32, message = "Phone number is required"))]
    pub phone_number: String,

    /// National identity number, e.g. "60001019906"
    #[validate(length(min = 1, max = 32, message = "National identity number is required"))]
    pub national_identity_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartAuthenticationResponse {
    /// Opaque token identifying the stored session
    pub session_token: String,
    /// Four digit code the user must compare with the one on the phone
    pub verification_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AuthenticateRequest {
    #[validate(length(min = 1, message = "Session token is required"))]
    pub session_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResponse {
    pub given_name: String,
    pub surname: String,
    pub identity_code: String,
    pub country: String,
}

impl From<AuthenticationIdentity> for IdentityResponse {
    fn from(identity: AuthenticationIdentity) -> Self {
        Self {
            given_name: identity.given_name,
            surname: identity.surname,
            identity_code: identity.identity_code,
            country: identity.country,
        }
    }
}
