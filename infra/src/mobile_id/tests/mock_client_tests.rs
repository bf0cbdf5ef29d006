//! Unit tests for the development Mobile-ID client

use std::sync::Arc;

use mid_core::domain::entities::UserRequest;
use mid_core::domain::value_objects::{
    AuthenticationHash, AuthenticationRequest, DisplaySettings, DisplayTextFormat, Language,
    RelyingParty,
};
use mid_core::errors::{MidAuthError, MobileIdError};
use mid_core::services::mobile_id::{
    AuthenticationServiceConfig, MobileIdAuthenticationService, MobileIdClient,
    MobileIdConnector, SessionStatusPoller, AUTHENTICATION_SESSION_STATUS_PATH,
};

use crate::mobile_id::{MockAuthenticationResponseValidator, MockMobileIdClient};

fn client() -> MockMobileIdClient {
    MockMobileIdClient::new("00000000-0000-0000-0000-000000000000", "DEMO")
}

fn request(phone: &str, nin: &str) -> AuthenticationRequest {
    AuthenticationRequest::new(
        &RelyingParty {
            uuid: "00000000-0000-0000-0000-000000000000".to_string(),
            name: "DEMO".to_string(),
        },
        &UserRequest::new(phone, nin).unwrap(),
        &AuthenticationHash::generate_random_of_default_type(),
        &DisplaySettings {
            language: Language::Eng,
            text: "Log in with MID demo?".to_string(),
            format: DisplayTextFormat::Gsm7,
        },
    )
    .unwrap()
}

#[tokio::test]
async fn test_connector_records_pending_session() {
    let client = client();

    let response = client
        .mobile_id_connector()
        .authenticate(&request("+37200000766", "60001019906"))
        .await
        .unwrap();

    assert!(uuid::Uuid::parse_str(&response.session_id).is_ok());
    assert_eq!(client.request_count(), 1);
    assert_eq!(client.pending_sessions().await, 1);
}

#[tokio::test]
async fn test_connector_rejects_invalid_request() {
    let client = client();
    let mut request = request("+37200000766", "60001019906");
    request.relying_party_uuid = "nope".to_string();

    let error = client
        .mobile_id_connector()
        .authenticate(&request)
        .await
        .unwrap_err();

    assert!(matches!(error, MobileIdError::InvalidRequest(_)));
    assert_eq!(client.request_count(), 0);
}

#[tokio::test]
async fn test_poller_completes_session_once() {
    let client = client();
    let response = client
        .mobile_id_connector()
        .authenticate(&request("+37200000766", "60001019906"))
        .await
        .unwrap();

    let status = client
        .session_status_poller()
        .fetch_final_session_status(&response.session_id, AUTHENTICATION_SESSION_STATUS_PATH)
        .await
        .unwrap();

    assert!(status.is_complete());
    assert!(status.is_ok());
    assert!(status.signature.is_some());
    assert!(status.cert.is_some());
    assert_eq!(client.pending_sessions().await, 0);

    let error = client
        .session_status_poller()
        .fetch_final_session_status(&response.session_id, AUTHENTICATION_SESSION_STATUS_PATH)
        .await
        .unwrap_err();
    assert_eq!(
        error,
        MobileIdError::SessionNotFound {
            session_id: response.session_id.clone()
        }
    );
}

#[tokio::test]
async fn test_poller_unknown_session() {
    let error = client()
        .session_status_poller()
        .fetch_final_session_status("missing", AUTHENTICATION_SESSION_STATUS_PATH)
        .await
        .unwrap_err();

    assert!(matches!(error, MobileIdError::SessionNotFound { .. }));
}

#[tokio::test]
async fn test_scripted_failure_result() {
    let client = client();
    let response = client
        .mobile_id_connector()
        .authenticate(&request("+37207110066", "60001019947"))
        .await
        .unwrap();

    let status = client
        .session_status_poller()
        .fetch_final_session_status(&response.session_id, AUTHENTICATION_SESSION_STATUS_PATH)
        .await
        .unwrap();

    assert_eq!(status.result.as_deref(), Some("USER_CANCELLED"));
    assert_eq!(status.ensure_successful(), Err(MobileIdError::UserCancelled));
}

#[tokio::test]
async fn test_full_authentication_with_demo_user() {
    let client = Arc::new(client());
    let service = MobileIdAuthenticationService::new(
        client.clone(),
        Arc::new(MockAuthenticationResponseValidator::new()),
        AuthenticationServiceConfig::default(),
    );

    let session = service.start_authentication(UserRequest::new("+37200000766", "60001019906").unwrap());
    let identity = service.authenticate(&session).await.unwrap();

    assert_eq!(identity.given_name, "MARY ÄNN");
    assert_eq!(identity.surname, "O’CONNEŽ-ŠUSLIK TESTNUMBER");
    assert_eq!(identity.identity_code, "60001019906");
    assert_eq!(identity.country, "EE");
}

#[tokio::test]
async fn test_full_authentication_not_mid_client() {
    let service = MobileIdAuthenticationService::new(
        Arc::new(client()),
        Arc::new(MockAuthenticationResponseValidator::new()),
        AuthenticationServiceConfig::default(),
    );

    let session = service.start_authentication(UserRequest::new("+37201100266", "60001019939").unwrap());
    let error = service.authenticate(&session).await.unwrap_err();

    assert!(matches!(error, MidAuthError::Failed(MobileIdError::NotMidClient)));
}

#[tokio::test(start_paused = true)]
async fn test_polling_sleep_is_honoured() {
    let client = client().with_polling_sleep(std::time::Duration::from_secs(5));
    let response = client
        .mobile_id_connector()
        .authenticate(&request("+37200000766", "60001019906"))
        .await
        .unwrap();

    let started = tokio::time::Instant::now();
    client
        .session_status_poller()
        .fetch_final_session_status(&response.session_id, AUTHENTICATION_SESSION_STATUS_PATH)
        .await
        .unwrap();

    assert!(started.elapsed() >= std::time::Duration::from_secs(5));
}
