//! Completed authentication and the outcome of validating it

use serde::{Deserialize, Serialize};

use super::hash_to_sign::{AuthenticationHash, HashType};
use super::identity::AuthenticationIdentity;
use super::session_status::SessionStatus;
use crate::errors::MobileIdError;

/// A finished Mobile-ID authentication, ready for validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileIdAuthentication {
    pub result: String,
    pub signature_value_in_base64: String,
    pub algorithm_name: String,
    /// Base64 encoded signer certificate
    pub certificate: Option<String>,
    pub signed_hash_in_base64: String,
    pub hash_type: HashType,
}

impl MobileIdAuthentication {
    /// Combine a final session status with the hash that was sent for signing
    pub fn from_session_status(
        status: &SessionStatus,
        hash: &AuthenticationHash,
    ) -> Result<Self, MobileIdError> {
        status.ensure_successful()?;

        let signature = status
            .signature
            .as_ref()
            .filter(|s| !s.value.is_empty())
            .ok_or(MobileIdError::MissingSignature)?;

        Ok(Self {
            result: status.result.clone().unwrap_or_default(),
            signature_value_in_base64: signature.value.clone(),
            algorithm_name: signature.algorithm.clone(),
            certificate: status.cert.clone(),
            signed_hash_in_base64: hash.hash_in_base64(),
            hash_type: hash.hash_type(),
        })
    }
}

/// Verdict of the response validator
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthenticationResult {
    pub valid: bool,
    pub identity: Option<AuthenticationIdentity>,
    pub errors: Vec<String>,
}

impl AuthenticationResult {
    pub fn valid(identity: AuthenticationIdentity) -> Self {
        Self {
            valid: true,
            identity: Some(identity),
            errors: Vec::new(),
        }
    }

    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            valid: false,
            identity: None,
            errors,
        }
    }

    /// Record an error; any error makes the result invalid
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.valid = false;
        self.errors.push(error.into());
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}
