//! Application factory
//!
//! Builds the Actix-web application around the shared state.

use actix_web::{
    http::StatusCode,
    middleware::{Condition, Logger},
    web, App, HttpResponse,
};

use mid_core::services::mobile_id::AuthenticationServiceTrait;
use mid_shared::config::{CorsConfig, Environment};
use mid_shared::errors::error_codes;

use crate::config::Config;
use crate::dto::{ErrorResponse, ErrorResponseExt};

use crate::middleware::cors::create_cors;
use crate::routes::auth::{authenticate::authenticate, start::start_authentication, AppState};

/// HTTP level settings applied when building the application
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub environment: Environment,
    pub cors: CorsConfig,
    /// Log every request through the access logger
    pub access_log: bool,
}

impl AppOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            environment: config.environment,
            cors: config.server.cors.clone(),
            access_log: config.logging.access_log,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<S>(
    app_state: web::Data<AppState<S>>,
    options: &AppOptions,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            impl actix_web::body::MessageBody,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: AuthenticationServiceTrait + ?Sized + 'static,
{
    let cors = create_cors(options.environment, &options.cors);

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware (CORS runs inside the access log)
        .wrap(cors)
        .wrap(Condition::new(options.access_log, Logger::default()))
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/start", web::post().to(start_authentication::<S>))
                        .route("/authenticate", web::post().to(authenticate::<S>)),
                )
                // API documentation endpoint
                .route("/", web::get().to(api_documentation)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "mid-demo-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Mobile-ID demo API v1",
        "endpoints": {
            "health": "/health",
            "auth": {
                "start": {
                    "path": "/api/v1/auth/start",
                    "method": "POST",
                    "description": "Start a Mobile-ID session and return the verification code",
                    "request_body": {
                        "phone_number": "string (e.g. +37200000766)",
                        "national_identity_number": "string (11 digits)"
                    },
                    "responses": {
                        "200": "Session started, returns session token and verification code",
                        "400": "Invalid phone number or national identity number"
                    }
                },
                "authenticate": {
                    "path": "/api/v1/auth/authenticate",
                    "method": "POST",
                    "description": "Wait for the user's confirmation and return the identity",
                    "request_body": {
                        "session_token": "string (from /auth/start)"
                    },
                    "responses": {
                        "200": "Authentication successful, returns identity",
                        "400": "User cancelled, not a Mobile-ID client or phone unreachable",
                        "401": "Authentication response failed validation",
                        "404": "Unknown or expired session token",
                        "408": "User did not respond in time"
                    }
                }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    ErrorResponse::new(error_codes::NOT_FOUND, "The requested resource was not found")
        .to_response(StatusCode::NOT_FOUND)
}
