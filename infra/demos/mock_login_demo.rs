//! Walk through a Mobile-ID login against the development client
//!
//! Run with: cargo run -p mid_infra --example mock_login_demo -- +37200000766 60001019906

use mid_core::domain::entities::UserRequest;
use mid_core::services::mobile_id::{AuthenticationServiceConfig, MobileIdAuthenticationService};
use mid_infra::mobile_id::{create_mobile_id_client, create_response_validator};
use mid_infra::session::create_session_store;
use mid_shared::config::{MobileIdConfig, SessionStoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let phone_number = args.next().unwrap_or_else(|| "+37200000766".to_string());
    let national_identity_number = args.next().unwrap_or_else(|| "60001019906".to_string());

    let config = MobileIdConfig::from_env();
    let service = MobileIdAuthenticationService::new(
        create_mobile_id_client(&config),
        create_response_validator(&config),
        AuthenticationServiceConfig::default(),
    );
    let store = create_session_store(&SessionStoreConfig::from_env()).await;

    let session = service.start_authentication(UserRequest::new(
        &phone_number,
        &national_identity_number,
    )?);
    println!("Verification code: {}", session.verification_code());

    let token = uuid::Uuid::new_v4().to_string();
    store.save(&token, &session).await?;
    let session = store
        .take(&token)
        .await?
        .ok_or("session disappeared from the store")?;

    match service.authenticate(&session).await {
        Ok(identity) => println!(
            "Authenticated {} {} ({}, {})",
            identity.given_name, identity.surname, identity.identity_code, identity.country
        ),
        Err(error) => println!("Authentication failed: {}", error),
    }

    Ok(())
}
