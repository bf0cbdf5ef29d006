//! Session status returned by the Mobile-ID status endpoint

use serde::{Deserialize, Serialize};

use crate::errors::MobileIdError;

/// Session state reported by the status endpoint
pub const STATE_RUNNING: &str = "RUNNING";
pub const STATE_COMPLETE: &str = "COMPLETE";

/// Final result codes of a completed session
pub const RESULT_OK: &str = "OK";
pub const RESULT_TIMEOUT: &str = "TIMEOUT";
pub const RESULT_NOT_MID_CLIENT: &str = "NOT_MID_CLIENT";
pub const RESULT_USER_CANCELLED: &str = "USER_CANCELLED";
pub const RESULT_SIGNATURE_HASH_MISMATCH: &str = "SIGNATURE_HASH_MISMATCH";
pub const RESULT_PHONE_ABSENT: &str = "PHONE_ABSENT";
pub const RESULT_DELIVERY_ERROR: &str = "DELIVERY_ERROR";
pub const RESULT_SIM_ERROR: &str = "SIM_ERROR";

/// Signature over the authentication hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSignature {
    pub algorithm: String,
    /// Base64 encoded signature value
    pub value: String,
}

/// Status of an authentication session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<SessionSignature>,
    /// Base64 encoded signer certificate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert: Option<String>,
}

impl SessionStatus {
    /// Status of a session still waiting for the user
    pub fn running() -> Self {
        Self {
            state: STATE_RUNNING.to_string(),
            result: None,
            signature: None,
            cert: None,
        }
    }

    /// Completed session with the given result code and no signature
    pub fn completed(result: impl Into<String>) -> Self {
        Self {
            state: STATE_COMPLETE.to_string(),
            result: Some(result.into()),
            signature: None,
            cert: None,
        }
    }

    pub fn with_signature(mut self, algorithm: impl Into<String>, value: impl Into<String>) -> Self {
        self.signature = Some(SessionSignature {
            algorithm: algorithm.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_cert(mut self, cert: impl Into<String>) -> Self {
        self.cert = Some(cert.into());
        self
    }

    pub fn is_complete(&self) -> bool {
        self.state.eq_ignore_ascii_case(STATE_COMPLETE)
    }

    pub fn is_ok(&self) -> bool {
        self.result
            .as_deref()
            .map(|r| r.eq_ignore_ascii_case(RESULT_OK))
            .unwrap_or(false)
    }

    /// Check that the session finished successfully
    ///
    /// Non-final states and every result code other than `OK` turn into the
    /// matching `MobileIdError`.
    pub fn ensure_successful(&self) -> Result<(), MobileIdError> {
        if !self.is_complete() {
            return Err(MobileIdError::IncompleteSession {
                state: self.state.clone(),
            });
        }

        let result = self.result.as_deref().unwrap_or_default().to_uppercase();
        match result.as_str() {
            RESULT_OK => Ok(()),
            RESULT_TIMEOUT => Err(MobileIdError::SessionTimeout),
            RESULT_NOT_MID_CLIENT => Err(MobileIdError::NotMidClient),
            RESULT_USER_CANCELLED => Err(MobileIdError::UserCancelled),
            RESULT_SIGNATURE_HASH_MISMATCH => Err(MobileIdError::SignatureHashMismatch),
            RESULT_PHONE_ABSENT => Err(MobileIdError::PhoneNotAvailable),
            RESULT_DELIVERY_ERROR => Err(MobileIdError::DeliveryError),
            RESULT_SIM_ERROR => Err(MobileIdError::SimError),
            "" => Err(MobileIdError::Internal(
                "Completed session carries no result".to_string(),
            )),
            other => Err(MobileIdError::Internal(format!(
                "Unknown session result: {}",
                other
            ))),
        }
    }
}
