//! Authentication request submitted to the Mobile-ID connector

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mid_shared::utils::{identity, phone};

use super::hash_to_sign::{AuthenticationHash, HashType};
use super::language::{DisplayTextFormat, Language};
use crate::domain::entities::UserRequest;
use crate::errors::ValidationError;

/// Relying party credentials registered with Mobile-ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelyingParty {
    pub uuid: String,
    pub name: String,
}

/// What the phone shows while asking for the PIN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    pub language: Language,
    pub text: String,
    pub format: DisplayTextFormat,
}

/// Request body of `POST /authentication`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationRequest {
    #[serde(rename = "relyingPartyUUID")]
    pub relying_party_uuid: String,
    pub relying_party_name: String,
    pub phone_number: String,
    pub national_identity_number: String,
    /// Base64 encoded hash to sign
    pub hash: String,
    pub hash_type: HashType,
    pub language: Language,
    pub display_text: String,
    pub display_text_format: DisplayTextFormat,
}

impl AuthenticationRequest {
    /// Assemble and validate a request for the given user and hash
    pub fn new(
        relying_party: &RelyingParty,
        user_request: &UserRequest,
        hash: &AuthenticationHash,
        display: &DisplaySettings,
    ) -> Result<Self, ValidationError> {
        let request = Self {
            relying_party_uuid: relying_party.uuid.clone(),
            relying_party_name: relying_party.name.clone(),
            phone_number: user_request.phone_number().to_string(),
            national_identity_number: user_request.national_identity_number().to_string(),
            hash: hash.hash_in_base64(),
            hash_type: hash.hash_type(),
            language: display.language,
            display_text: display.text.clone(),
            display_text_format: display.format,
        };
        request.validate()?;
        Ok(request)
    }

    /// Check every field against the Mobile-ID request rules
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.relying_party_uuid.trim().is_empty() {
            return Err(required("relyingPartyUUID"));
        }
        if Uuid::parse_str(&self.relying_party_uuid).is_err() {
            return Err(invalid("relyingPartyUUID"));
        }
        if self.relying_party_name.trim().is_empty() {
            return Err(required("relyingPartyName"));
        }
        if !phone::is_valid_mid_phone_number(&self.phone_number) {
            return Err(invalid("phoneNumber"));
        }
        if !identity::is_valid_national_identity_number(&self.national_identity_number) {
            return Err(invalid("nationalIdentityNumber"));
        }
        if self.hash.is_empty() {
            return Err(required("hash"));
        }
        if self.display_text.trim().is_empty() {
            return Err(required("displayText"));
        }
        Ok(())
    }
}

fn required(field: &str) -> ValidationError {
    ValidationError::RequiredField {
        field: field.to_string(),
    }
}

fn invalid(field: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: field.to_string(),
    }
}

/// Response of `POST /authentication`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationResponse {
    pub session_id: String,
}
