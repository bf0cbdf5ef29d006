use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use mid_api::app::{create_app, AppOptions};
use mid_api::config::Config;
use mid_api::routes::auth::AppState;
use mid_core::services::mobile_id::{AuthenticationServiceConfig, MobileIdAuthenticationService};
use mid_infra::mobile_id::{create_mobile_id_client, create_response_validator};
use mid_infra::session::create_session_store;
use mid_shared::config::Environment;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables, environment specific file first
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(&config.logging.level));

    info!("Starting Mobile-ID demo API server ({})", config.environment);

    // Wire the authentication service and session storage
    let client = create_mobile_id_client(&config.mobile_id);
    let validator = create_response_validator(&config.mobile_id);
    let auth_service = Arc::new(MobileIdAuthenticationService::new(
        client,
        validator,
        AuthenticationServiceConfig::default(),
    ));
    let session_store = create_session_store(&config.session).await;

    let app_state = web::Data::new(AppState::new(auth_service, session_store));

    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let options = AppOptions::from_config(&config);
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &options));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server terminated with an error")?;

    Ok(())
}
