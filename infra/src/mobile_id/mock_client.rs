//! Development Mobile-ID client
//!
//! Answers authentication requests locally instead of calling the Mobile-ID
//! REST API. Every session completes on the first status request, either
//! successfully or with the result scripted for the demo phone number.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

use mid_core::domain::value_objects::{
    AuthenticationRequest, AuthenticationResponse, SessionStatus,
};
use mid_core::errors::MobileIdError;
use mid_core::services::mobile_id::{MobileIdClient, MobileIdConnector, SessionStatusPoller};
use mid_shared::config::MobileIdConfig;
use mid_shared::utils::phone::mask_phone_number;

/// Placeholder in status paths replaced by the session id
const SESSION_ID_PLACEHOLDER: &str = "{sessionId}";

/// Signature algorithm reported for synthetic signatures
pub const MOCK_SIGNATURE_ALGORITHM: &str = "SHA256WithECEncryption";

/// Demo phone numbers whose sessions end with a failure result
const SCRIPTED_RESULTS: &[(&str, &str)] = &[
    ("+37201100266", "NOT_MID_CLIENT"),
    ("+37207110066", "USER_CANCELLED"),
    ("+37201200266", "SIGNATURE_HASH_MISMATCH"),
    ("+37213100266", "SIM_ERROR"),
    ("+37201300266", "PHONE_ABSENT"),
    ("+37201400266", "DELIVERY_ERROR"),
    ("+37266000266", "TIMEOUT"),
];

/// Known demo identities by national identity number
const DEMO_IDENTITIES: &[(&str, &str, &str)] = &[
    ("60001019906", "MARY ÄNN", "O’CONNEŽ-ŠUSLIK TESTNUMBER"),
    ("50001018865", "JONAS", "TESTNUMBER"),
];

#[derive(Debug, Clone)]
struct PendingSession {
    phone_number: String,
    national_identity_number: String,
    hash: String,
}

type SessionTable = Arc<RwLock<HashMap<String, PendingSession>>>;

/// Connector recording submitted requests as pending sessions
pub struct MockConnector {
    sessions: SessionTable,
    request_count: AtomicU64,
}

#[async_trait]
impl MobileIdConnector for MockConnector {
    async fn authenticate(
        &self,
        request: &AuthenticationRequest,
    ) -> Result<AuthenticationResponse, MobileIdError> {
        request.validate()?;

        let session_id = Uuid::new_v4().to_string();
        let count = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;

        self.sessions.write().await.insert(
            session_id.clone(),
            PendingSession {
                phone_number: request.phone_number.clone(),
                national_identity_number: request.national_identity_number.clone(),
                hash: request.hash.clone(),
            },
        );

        tracing::info!(
            target: "mobile_id",
            provider = "mock",
            phone = %mask_phone_number(&request.phone_number),
            session_id = %session_id,
            hash_type = %request.hash_type,
            request_number = count,
            event = "mid_request_accepted",
            "Authentication request accepted (mock)"
        );

        Ok(AuthenticationResponse { session_id })
    }
}

/// Poller completing pending sessions
pub struct MockPoller {
    sessions: SessionTable,
    polling_sleep: Duration,
}

#[async_trait]
impl SessionStatusPoller for MockPoller {
    async fn fetch_final_session_status(
        &self,
        session_id: &str,
        path: &str,
    ) -> Result<SessionStatus, MobileIdError> {
        let resolved_path = path.replace(SESSION_ID_PLACEHOLDER, session_id);
        tracing::debug!(
            target: "mobile_id",
            provider = "mock",
            path = %resolved_path,
            "Polling session status (mock)"
        );

        if !self.polling_sleep.is_zero() {
            tokio::time::sleep(self.polling_sleep).await;
        }

        let session = self
            .sessions
            .write()
            .await
            .remove(session_id)
            .ok_or_else(|| MobileIdError::SessionNotFound {
                session_id: session_id.to_string(),
            })?;

        let status = match scripted_result(&session.phone_number) {
            Some(result) => SessionStatus::completed(result),
            None => SessionStatus::completed("OK")
                .with_signature(MOCK_SIGNATURE_ALGORITHM, synthetic_signature(&session.hash))
                .with_cert(STANDARD.encode(subject_dn(&session))),
        };

        tracing::info!(
            target: "mobile_id",
            provider = "mock",
            session_id = %session_id,
            result = status.result.as_deref().unwrap_or_default(),
            event = "mid_session_completed",
            "Session completed (mock)"
        );

        Ok(status)
    }
}

/// Mobile-ID client answering locally, for development and tests
pub struct MockMobileIdClient {
    relying_party_uuid: String,
    relying_party_name: String,
    connector: MockConnector,
    poller: MockPoller,
}

impl MockMobileIdClient {
    /// Create a client for the given relying party, completing sessions immediately
    pub fn new(relying_party_uuid: impl Into<String>, relying_party_name: impl Into<String>) -> Self {
        let sessions: SessionTable = Arc::new(RwLock::new(HashMap::new()));
        Self {
            relying_party_uuid: relying_party_uuid.into(),
            relying_party_name: relying_party_name.into(),
            connector: MockConnector {
                sessions: sessions.clone(),
                request_count: AtomicU64::new(0),
            },
            poller: MockPoller {
                sessions,
                polling_sleep: Duration::ZERO,
            },
        }
    }

    /// Create a client from configuration, honouring the polling sleep
    pub fn from_config(config: &MobileIdConfig) -> Self {
        Self::new(&config.relying_party_uuid, &config.relying_party_name)
            .with_polling_sleep(Duration::from_secs(config.polling_sleep_seconds))
    }

    /// Wait this long before answering a status request
    pub fn with_polling_sleep(mut self, polling_sleep: Duration) -> Self {
        self.poller.polling_sleep = polling_sleep;
        self
    }

    /// Number of authentication requests accepted so far
    pub fn request_count(&self) -> u64 {
        self.connector.request_count.load(Ordering::SeqCst)
    }

    /// Number of sessions waiting for a status request
    pub async fn pending_sessions(&self) -> usize {
        self.connector.sessions.read().await.len()
    }
}

impl MobileIdClient for MockMobileIdClient {
    fn relying_party_uuid(&self) -> &str {
        &self.relying_party_uuid
    }

    fn relying_party_name(&self) -> &str {
        &self.relying_party_name
    }

    fn mobile_id_connector(&self) -> &dyn MobileIdConnector {
        &self.connector
    }

    fn session_status_poller(&self) -> &dyn SessionStatusPoller {
        &self.poller
    }
}

fn scripted_result(phone_number: &str) -> Option<&'static str> {
    SCRIPTED_RESULTS
        .iter()
        .find(|(phone, _)| *phone == phone_number)
        .map(|(_, result)| *result)
}

fn synthetic_signature(hash_in_base64: &str) -> String {
    let digest = Sha256::digest(hash_in_base64.as_bytes());
    STANDARD.encode(digest)
}

fn subject_dn(session: &PendingSession) -> String {
    let nin = session.national_identity_number.as_str();
    let (given_name, surname) = DEMO_IDENTITIES
        .iter()
        .find(|(code, _, _)| *code == nin)
        .map(|(_, given_name, surname)| (*given_name, *surname))
        .unwrap_or(("DEMO", "TESTNUMBER"));
    let country = country_of(&session.phone_number);

    format!(
        "SERIALNUMBER=PNO{country}-{nin}, GN={given_name}, SN={surname}, C={country}"
    )
}

fn country_of(phone_number: &str) -> &'static str {
    if phone_number.starts_with("+370") {
        "LT"
    } else {
        "EE"
    }
}
