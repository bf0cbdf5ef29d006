//! Authentication session handed from the start step to the completion step

use serde::{Deserialize, Serialize};

use super::user_request::UserRequest;
use crate::domain::value_objects::hash_to_sign::{AuthenticationHash, VerificationCode};

/// Everything the completion step needs, bound together at session start
///
/// Treated as an opaque token by callers: it is created by the
/// authentication service and must come back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationSessionInfo {
    user_request: UserRequest,
    authentication_hash: AuthenticationHash,
    verification_code: VerificationCode,
}

impl AuthenticationSessionInfo {
    /// Bind a user request to a hash, deriving the verification code from it
    pub fn new(user_request: UserRequest, authentication_hash: AuthenticationHash) -> Self {
        let verification_code = authentication_hash.calculate_verification_code();
        Self {
            user_request,
            authentication_hash,
            verification_code,
        }
    }

    pub fn user_request(&self) -> &UserRequest {
        &self.user_request
    }

    pub fn authentication_hash(&self) -> &AuthenticationHash {
        &self.authentication_hash
    }

    pub fn verification_code(&self) -> &VerificationCode {
        &self.verification_code
    }

    /// Whether the stored code is still the one derived from the stored hash
    ///
    /// Only fails for values that were altered after construction, e.g. a
    /// tampered copy read back from external storage.
    pub fn is_consistent(&self) -> bool {
        self.authentication_hash.calculate_verification_code() == self.verification_code
    }
}
