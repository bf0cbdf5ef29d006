//! Login details entered by the end user

use serde::{Deserialize, Serialize};

use mid_shared::utils::{identity, phone};

use crate::errors::ValidationError;

/// Phone number and national identity number of the user logging in
///
/// Immutable once created; the constructor rejects values Mobile-ID would
/// refuse anyway so the error reaches the user before any session starts.
/// Deserialization goes through the same checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UnvalidatedUserRequest")]
pub struct UserRequest {
    phone_number: String,
    national_identity_number: String,
}

#[derive(Deserialize)]
struct UnvalidatedUserRequest {
    phone_number: String,
    national_identity_number: String,
}

impl TryFrom<UnvalidatedUserRequest> for UserRequest {
    type Error = ValidationError;

    fn try_from(raw: UnvalidatedUserRequest) -> Result<Self, Self::Error> {
        UserRequest::new(raw.phone_number, raw.national_identity_number)
    }
}

impl UserRequest {
    /// Create a validated user request
    ///
    /// Spaces, dashes and brackets are stripped from the phone number before
    /// it is checked against the `+` and 8-30 digits format. The national
    /// identity number must be exactly 11 digits.
    pub fn new(
        phone_number: impl AsRef<str>,
        national_identity_number: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let phone_number = phone::normalize_phone_number(phone_number.as_ref());
        let national_identity_number = national_identity_number.as_ref().trim().to_string();

        if phone_number.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "phone_number".to_string(),
            });
        }
        if !phone::is_valid_mid_phone_number(&phone_number) {
            return Err(ValidationError::InvalidFormat {
                field: "phone_number".to_string(),
            });
        }
        if national_identity_number.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "national_identity_number".to_string(),
            });
        }
        if !identity::is_valid_national_identity_number(&national_identity_number) {
            return Err(ValidationError::InvalidFormat {
                field: "national_identity_number".to_string(),
            });
        }

        Ok(Self {
            phone_number,
            national_identity_number,
        })
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn national_identity_number(&self) -> &str {
        &self.national_identity_number
    }
}
