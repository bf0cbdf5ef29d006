use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use mid_core::services::mobile_id::AuthenticationServiceTrait;
use mid_shared::errors::error_codes;

use super::AppState;
use crate::dto::{AuthenticateRequest, ErrorResponse, ErrorResponseExt, IdentityResponse};
use crate::handlers::error::{
    handle_domain_error, handle_mid_auth_error, handle_validation_errors,
};

/// Handler for POST /api/v1/auth/authenticate
///
/// Completes the session stored under the token. The session is consumed
/// whatever the outcome, so a token can be used once.
///
/// # Request Body
///
/// ```json
/// { "session_token": "550e8400-e29b-41d4-a716-446655440000" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "given_name": "MARY ÄNN",
///     "surname": "O’CONNEŽ-ŠUSLIK TESTNUMBER",
///     "identity_code": "60001019906",
///     "country": "EE"
/// }
/// ```
///
/// ## Errors
/// - 404 Not Found: Unknown or expired session token
/// - 401 Unauthorized: Response failed validation
/// - 4xx/5xx: Mobile-ID failure, see the error code
pub async fn authenticate<S>(
    state: web::Data<AppState<S>>,
    request: web::Json<AuthenticateRequest>,
) -> HttpResponse
where
    S: AuthenticationServiceTrait + ?Sized + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    let session = match state.session_store.take(&request.session_token).await {
        Ok(Some(session)) => session,
        Ok(None) => {
            log::warn!("Authentication requested for unknown session token");
            return ErrorResponse::new(
                error_codes::SESSION_NOT_FOUND,
                "Authentication session not found or expired",
            )
            .to_response(StatusCode::NOT_FOUND);
        }
        Err(error) => {
            log::error!("Failed to load authentication session: {}", error);
            return handle_domain_error(&error);
        }
    };

    match state.auth_service.authenticate(&session).await {
        Ok(identity) => HttpResponse::Ok().json(IdentityResponse::from(identity)),
        Err(error) => handle_mid_auth_error(&error),
    }
}
