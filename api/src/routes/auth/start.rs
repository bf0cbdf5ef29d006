use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use mid_core::domain::entities::UserRequest;
use mid_core::services::mobile_id::AuthenticationServiceTrait;
use mid_shared::utils::phone::mask_phone_number;

use super::AppState;
use crate::dto::{StartAuthenticationRequest, StartAuthenticationResponse};
use crate::handlers::error::{
    handle_domain_error, handle_validation_error, handle_validation_errors,
};

/// Handler for POST /api/v1/auth/start
///
/// Starts a Mobile-ID session and stores it under a fresh session token.
///
/// # Request Body
///
/// ```json
/// {
///     "phone_number": "+37200000766",
///     "national_identity_number": "60001019906"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "session_token": "550e8400-e29b-41d4-a716-446655440000",
///     "verification_code": "1234"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or malformed phone number or identity number
/// - 500 Internal Server Error: Session could not be stored
pub async fn start_authentication<S>(
    state: web::Data<AppState<S>>,
    request: web::Json<StartAuthenticationRequest>,
) -> HttpResponse
where
    S: AuthenticationServiceTrait + ?Sized + 'static,
{
    if let Err(errors) = request.validate() {
        log::warn!("Validation failed for start request: {:?}", errors);
        return handle_validation_errors(&errors);
    }

    let request = request.into_inner();
    let user_request =
        match UserRequest::new(&request.phone_number, &request.national_identity_number) {
            Ok(user_request) => user_request,
            Err(error) => {
                log::warn!("Rejected start request: {}", error);
                return handle_validation_error(&error);
            }
        };

    let session = state.auth_service.start_authentication(user_request);
    let session_token = Uuid::new_v4().to_string();

    if let Err(error) = state.session_store.save(&session_token, &session).await {
        log::error!("Failed to store authentication session: {}", error);
        return handle_domain_error(&error);
    }

    log::info!(
        "Started Mobile-ID session for phone: {}",
        mask_phone_number(session.user_request().phone_number())
    );

    HttpResponse::Ok().json(StartAuthenticationResponse {
        session_token,
        verification_code: session.verification_code().to_string(),
    })
}
