use actix_web::{http::StatusCode, HttpResponse};
use mid_core::errors::{DomainError, MidAuthError, MobileIdError, ValidationError};
use mid_shared::errors::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Status code, error code and user facing message for a Mobile-ID failure
fn describe_mobile_id_error(error: &MobileIdError) -> (StatusCode, &'static str, String) {
    match error {
        MobileIdError::InvalidRequest(cause) => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            format!("Invalid authentication request: {}", cause),
        ),
        MobileIdError::UserCancelled => (
            StatusCode::BAD_REQUEST,
            error_codes::USER_CANCELLED,
            "You cancelled the operation".to_string(),
        ),
        MobileIdError::NotMidClient => (
            StatusCode::BAD_REQUEST,
            error_codes::NOT_MID_CLIENT,
            "You are not a Mobile-ID client or your Mobile-ID certificates are revoked"
                .to_string(),
        ),
        MobileIdError::PhoneNotAvailable => (
            StatusCode::BAD_REQUEST,
            error_codes::PHONE_NOT_AVAILABLE,
            "Unable to reach your phone. Please make sure your phone has mobile coverage"
                .to_string(),
        ),
        MobileIdError::SessionTimeout => (
            StatusCode::REQUEST_TIMEOUT,
            error_codes::SESSION_TIMEOUT,
            "You didn't type in PIN code into your phone or there was a communication error"
                .to_string(),
        ),
        MobileIdError::SimError | MobileIdError::SignatureHashMismatch => (
            StatusCode::UNPROCESSABLE_ENTITY,
            error_codes::INVALID_USER_CONFIGURATION,
            "Mobile-ID configuration on your SIM card differs from what is configured on \
             service provider's side. Please contact your mobile operator"
                .to_string(),
        ),
        MobileIdError::DeliveryError => (
            StatusCode::BAD_GATEWAY,
            error_codes::DELIVERY_ERROR,
            "Communication error. Unable to reach your phone".to_string(),
        ),
        MobileIdError::SessionNotFound { .. }
        | MobileIdError::IncompleteSession { .. }
        | MobileIdError::MissingSignature
        | MobileIdError::SessionIntegrity => (
            StatusCode::BAD_GATEWAY,
            error_codes::AUTHENTICATION_FAILED,
            error.to_string(),
        ),
        MobileIdError::Connection(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            error_codes::SERVICE_UNAVAILABLE,
            "Mobile-ID service is temporarily unavailable. Please try again later".to_string(),
        ),
        MobileIdError::Unauthorized | MobileIdError::Internal(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            "Client side error with Mobile-ID integration".to_string(),
        ),
    }
}

/// Convert an authentication failure into an HTTP response
pub fn handle_mid_auth_error(error: &MidAuthError) -> HttpResponse {
    match error {
        MidAuthError::Failed(cause) => {
            let (status, code, message) = describe_mobile_id_error(cause);
            if status.is_server_error() {
                log::error!("Mobile-ID authentication failed: {}", cause);
            } else {
                log::warn!("Mobile-ID authentication failed: {}", cause);
            }
            ErrorResponse::new(code, message).to_response(status)
        }
        MidAuthError::InvalidResult { errors } => {
            log::warn!("Mobile-ID authentication result is invalid: {:?}", errors);
            ErrorResponse::new(
                error_codes::AUTHENTICATION_INVALID,
                "Mobile-ID authentication response could not be validated",
            )
            .add_detail("errors", errors)
            .to_response(StatusCode::UNAUTHORIZED)
        }
    }
}

/// Convert an input validation failure into a 400 response
pub fn handle_validation_error(error: &ValidationError) -> HttpResponse {
    ErrorResponse::new(error_codes::VALIDATION_ERROR, error.to_string())
        .add_detail("field", error.field())
        .to_response(StatusCode::BAD_REQUEST)
}

/// Convert derive-based DTO validation errors into a 400 response
pub fn handle_validation_errors(errors: &validator::ValidationErrors) -> HttpResponse {
    let fields: std::collections::HashMap<String, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
        .add_detail("fields", fields)
        .to_response(StatusCode::BAD_REQUEST)
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::MidAuth(error) => handle_mid_auth_error(error),
        DomainError::ValidationErr(error) => handle_validation_error(error),
        DomainError::Validation { message } => {
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())
                .to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::NotFound { resource } => ErrorResponse::new(
            error_codes::NOT_FOUND,
            format!("Resource not found: {}", resource),
        )
        .to_response(StatusCode::NOT_FOUND),
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
