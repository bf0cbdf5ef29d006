//! Unit tests for domain error types

use std::error::Error;

use crate::errors::{DomainError, MidAuthError, MobileIdError, ValidationError};

#[test]
fn test_validation_error_messages() {
    let error = ValidationError::InvalidFormat {
        field: "phone_number".to_string(),
    };
    assert_eq!(error.to_string(), "Invalid format: phone_number");
    assert_eq!(error.field(), "phone_number");
}

#[test]
fn test_failed_exposes_wrapped_cause() {
    let error = MidAuthError::from(MobileIdError::UserCancelled);

    assert_eq!(error.cause(), Some(&MobileIdError::UserCancelled));
    assert!(error.errors().is_empty());
    assert!(error.to_string().contains("User cancelled the operation"));

    let source = error.source().expect("cause is the error source");
    assert_eq!(source.to_string(), MobileIdError::UserCancelled.to_string());
}

#[test]
fn test_invalid_result_carries_error_list() {
    let errors = vec![
        "Signature verification failed".to_string(),
        "Signer's certificate is not trusted".to_string(),
    ];
    let error = MidAuthError::InvalidResult {
        errors: errors.clone(),
    };

    assert!(error.cause().is_none());
    assert_eq!(error.errors(), errors.as_slice());
    assert!(error
        .to_string()
        .contains("Signature verification failed; Signer's certificate is not trusted"));
}

#[test]
fn test_validation_error_converts_into_request_error() {
    let validation = ValidationError::RequiredField {
        field: "relyingPartyName".to_string(),
    };
    let error: MobileIdError = validation.clone().into();
    assert_eq!(error, MobileIdError::InvalidRequest(validation));
    assert!(!error.is_user_error());
}

#[test]
fn test_user_errors() {
    assert!(MobileIdError::SessionTimeout.is_user_error());
    assert!(MobileIdError::NotMidClient.is_user_error());
    assert!(!MobileIdError::Unauthorized.is_user_error());
    assert!(!MobileIdError::Connection("reset".to_string()).is_user_error());
}

#[test]
fn test_domain_error_bridges() {
    let error: DomainError = MidAuthError::from(MobileIdError::SimError).into();
    assert!(matches!(error, DomainError::MidAuth(_)));
    assert!(error.to_string().contains("SIM application error"));
}
