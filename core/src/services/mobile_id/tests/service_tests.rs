//! Unit tests for the Mobile-ID authentication service

use std::sync::Arc;

use super::mocks::{completed_status, test_identity, MockClient, MockValidator, SESSION_ID};
use crate::domain::entities::{AuthenticationSessionInfo, UserRequest};
use crate::domain::value_objects::{
    AuthenticationHash, AuthenticationResult, DisplayTextFormat, HashType, Language,
    SessionStatus,
};
use crate::errors::{MidAuthError, MobileIdError};
use crate::services::mobile_id::{
    AuthenticationServiceConfig, AuthenticationServiceTrait, MobileIdAuthenticationService,
    AUTHENTICATION_SESSION_STATUS_PATH, DEFAULT_DISPLAY_TEXT,
};

fn user_request() -> UserRequest {
    UserRequest::new("+37200000766", "60001019906").unwrap()
}

fn create_service(
    client: MockClient,
    validator: MockValidator,
) -> (
    MobileIdAuthenticationService<MockClient, MockValidator>,
    Arc<MockClient>,
    Arc<MockValidator>,
) {
    let client = Arc::new(client);
    let validator = Arc::new(validator);
    let service = MobileIdAuthenticationService::new(
        client.clone(),
        validator.clone(),
        AuthenticationServiceConfig::default(),
    );
    (service, client, validator)
}

#[test]
fn test_start_authentication_derives_code_from_hash() {
    let (service, client, _) = create_service(MockClient::new(), MockValidator::accepting());

    let session = service.start_authentication(user_request());

    assert_eq!(session.authentication_hash().hash_type(), HashType::Sha256);
    assert_eq!(session.authentication_hash().hash().len(), 32);
    assert_eq!(
        session.verification_code(),
        &session.authentication_hash().calculate_verification_code()
    );
    assert_eq!(session.verification_code().as_str().len(), 4);
    assert_eq!(session.user_request(), &user_request());

    // Starting a session never talks to Mobile-ID
    assert!(client.submitted_requests().is_empty());
    assert!(client.poll_calls().is_empty());
}

#[test]
fn test_start_authentication_uses_fresh_hash_each_time() {
    let (service, _, _) = create_service(MockClient::new(), MockValidator::accepting());

    let first = service.start_authentication(user_request());
    let second = service.start_authentication(user_request());

    assert_ne!(
        first.authentication_hash().hash(),
        second.authentication_hash().hash()
    );
}

#[tokio::test]
async fn test_authenticate_returns_validator_identity() {
    let (service, _, validator) = create_service(MockClient::new(), MockValidator::accepting());
    let session = service.start_authentication(user_request());

    let identity = service.authenticate(&session).await.unwrap();

    assert_eq!(identity, test_identity());
    assert_eq!(identity.given_name, "MARY ÄNN");
    assert_eq!(identity.surname, "O’CONNEŽ-ŠUSLIK TESTNUMBER");
    assert_eq!(identity.identity_code, "60001019906");
    assert_eq!(identity.country, "EE");

    let validated = validator.validated();
    assert_eq!(validated.len(), 1);
    assert_eq!(
        validated[0].signed_hash_in_base64,
        session.authentication_hash().hash_in_base64()
    );
    assert_eq!(validated[0].signature_value_in_base64, "c2lnbmF0dXJl");
}

#[tokio::test]
async fn test_authenticate_submits_expected_request() {
    let (service, client, _) = create_service(MockClient::new(), MockValidator::accepting());
    let session = service.start_authentication(user_request());

    service.authenticate(&session).await.unwrap();

    let requests = client.submitted_requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.relying_party_uuid, "00000000-0000-0000-0000-000000000000");
    assert_eq!(request.relying_party_name, "DEMO");
    assert_eq!(request.phone_number, "+37200000766");
    assert_eq!(request.national_identity_number, "60001019906");
    assert_eq!(request.hash, session.authentication_hash().hash_in_base64());
    assert_eq!(request.hash_type, HashType::Sha256);
    assert_eq!(request.language, Language::Eng);
    assert_eq!(request.display_text, DEFAULT_DISPLAY_TEXT);
    assert_eq!(request.display_text_format, DisplayTextFormat::Gsm7);

    assert_eq!(
        client.poll_calls(),
        vec![(
            SESSION_ID.to_string(),
            AUTHENTICATION_SESSION_STATUS_PATH.to_string()
        )]
    );
}

#[tokio::test]
async fn test_authenticate_invalid_result_carries_errors() {
    let errors = vec![
        "Signature verification failed".to_string(),
        "Signer's certificate is not trusted".to_string(),
    ];
    let (service, _, _) = create_service(
        MockClient::new(),
        MockValidator::new(AuthenticationResult::invalid(errors.clone())),
    );
    let session = service.start_authentication(user_request());

    let error = service.authenticate(&session).await.unwrap_err();

    match error {
        MidAuthError::InvalidResult { errors: reported } => assert_eq!(reported, errors),
        other => panic!("Expected InvalidResult, got {:?}", other),
    }
}

#[tokio::test]
async fn test_authenticate_valid_result_without_identity() {
    let result = AuthenticationResult {
        valid: true,
        identity: None,
        errors: Vec::new(),
    };
    let (service, _, _) = create_service(MockClient::new(), MockValidator::new(result));
    let session = service.start_authentication(user_request());

    let error = service.authenticate(&session).await.unwrap_err();

    assert!(matches!(error, MidAuthError::InvalidResult { .. }));
    assert_eq!(error.errors().len(), 1);
}

#[tokio::test]
async fn test_authenticate_wraps_connector_error() {
    let client = MockClient::new().with_connector_error(MobileIdError::NotMidClient);
    let (service, client, validator) = create_service(client, MockValidator::accepting());
    let session = service.start_authentication(user_request());

    let error = service.authenticate(&session).await.unwrap_err();

    assert_eq!(error.cause(), Some(&MobileIdError::NotMidClient));
    assert!(client.poll_calls().is_empty());
    assert!(validator.validated().is_empty());
}

#[tokio::test]
async fn test_authenticate_wraps_poller_error() {
    let client = MockClient::new()
        .with_poller_result(Err(MobileIdError::Connection("connection refused".to_string())));
    let (service, _, validator) = create_service(client, MockValidator::accepting());
    let session = service.start_authentication(user_request());

    let error = service.authenticate(&session).await.unwrap_err();

    match &error {
        MidAuthError::Failed(MobileIdError::Connection(message)) => {
            assert_eq!(message, "connection refused")
        }
        other => panic!("Expected wrapped connection error, got {:?}", other),
    }
    assert!(validator.validated().is_empty());
}

#[tokio::test]
async fn test_authenticate_maps_session_results() {
    let cases = [
        ("USER_CANCELLED", MobileIdError::UserCancelled),
        ("TIMEOUT", MobileIdError::SessionTimeout),
        ("PHONE_ABSENT", MobileIdError::PhoneNotAvailable),
        ("DELIVERY_ERROR", MobileIdError::DeliveryError),
    ];

    for (result, expected) in cases {
        let client = MockClient::new().with_poller_result(Ok(SessionStatus::completed(result)));
        let (service, _, _) = create_service(client, MockValidator::accepting());
        let session = service.start_authentication(user_request());

        let error = service.authenticate(&session).await.unwrap_err();
        assert_eq!(error.cause(), Some(&expected));
    }
}

#[tokio::test]
async fn test_authenticate_missing_signature() {
    let client = MockClient::new()
        .with_poller_result(Ok(SessionStatus::completed("OK").with_cert("Y2VydA==")));
    let (service, _, _) = create_service(client, MockValidator::accepting());
    let session = service.start_authentication(user_request());

    let error = service.authenticate(&session).await.unwrap_err();

    assert_eq!(error.cause(), Some(&MobileIdError::MissingSignature));
}

#[tokio::test]
async fn test_authenticate_rejects_tampered_session() {
    let (service, client, _) = create_service(MockClient::new(), MockValidator::accepting());
    let session = service.start_authentication(user_request());

    let mut json = serde_json::to_value(&session).unwrap();
    let tampered_code = if session.verification_code().as_str() == "1234" {
        "4321"
    } else {
        "1234"
    };
    json["verification_code"] = serde_json::Value::String(tampered_code.to_string());
    let tampered: AuthenticationSessionInfo = serde_json::from_value(json).unwrap();

    let error = service.authenticate(&tampered).await.unwrap_err();

    assert_eq!(error.cause(), Some(&MobileIdError::SessionIntegrity));
    assert!(client.submitted_requests().is_empty());
}

#[tokio::test]
async fn test_authenticate_with_known_hash() {
    let (service, client, _) = create_service(MockClient::new(), MockValidator::accepting());
    let hash = AuthenticationHash::new(HashType::Sha256, vec![0xFB, 0xFF]);
    let session = AuthenticationSessionInfo::new(user_request(), hash);

    assert_eq!(session.verification_code().as_str(), "8063");
    service.authenticate(&session).await.unwrap();
    assert_eq!(client.submitted_requests()[0].hash, "+/8=");
}

#[tokio::test]
async fn test_service_behind_trait_object() {
    let client: Arc<MockClient> = Arc::new(MockClient::new().with_poller_result(Ok(completed_status())));
    let validator = Arc::new(MockValidator::accepting());
    let service: Arc<dyn AuthenticationServiceTrait> = Arc::new(MobileIdAuthenticationService::new(
        client,
        validator,
        AuthenticationServiceConfig::default(),
    ));

    let session = service.start_authentication(user_request());
    let identity = service.authenticate(&session).await.unwrap();

    assert_eq!(identity.identity_code, "60001019906");
}
