//! CORS middleware configuration for cross-origin requests.
//!
//! The demo front end usually runs on a different origin than the API. The
//! configuration is environment-aware: permissive in development, limited to
//! the configured origins in production.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use mid_shared::config::{CorsConfig, Environment};

/// Creates a CORS middleware instance for the given environment.
///
/// # Environment Variables
/// - `CORS_ALLOWED_ORIGINS`: Comma-separated list of allowed origins
pub fn create_cors(environment: Environment, config: &CorsConfig) -> Cors {
    if environment.is_production() && !config.allows_any_origin() {
        create_production_cors(config)
    } else {
        create_development_cors(config.max_age)
    }
}

/// Permissive configuration accepting any origin.
fn create_development_cors(max_age: usize) -> Cors {
    log::info!("Configuring permissive CORS");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(max_age)
}

/// Restrictive configuration accepting only the configured origins.
fn create_production_cors(config: &CorsConfig) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(config.max_age);

    for origin in &config.allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}
