//! Mobile-ID Client Module
//!
//! Implementations of the Mobile-ID client and response validator used by
//! the authentication service.
//!
//! ## Providers
//!
//! - **mock**: Local development client answering without network traffic

pub mod mock_client;
pub mod mock_validator;

pub use mock_client::{MockMobileIdClient, MOCK_SIGNATURE_ALGORITHM};
pub use mock_validator::MockAuthenticationResponseValidator;

use std::sync::Arc;

use mid_core::services::mobile_id::{AuthenticationResponseValidator, MobileIdClient};
use mid_shared::config::MobileIdConfig;

#[cfg(test)]
mod tests;

/// Create a Mobile-ID client based on configuration
///
/// Returns the client implementation for the configured provider. Unknown
/// providers fall back to the development client with a warning.
pub fn create_mobile_id_client(config: &MobileIdConfig) -> Arc<dyn MobileIdClient> {
    tracing::info!(
        provider = %config.provider,
        host_url = %config.host_url,
        relying_party = %config.relying_party_name,
        demo_relying_party = config.is_demo_relying_party(),
        long_polling_timeout_seconds = config.long_polling_timeout_seconds,
        "Creating Mobile-ID client"
    );

    match config.provider.as_str() {
        "mock" => Arc::new(MockMobileIdClient::from_config(config)),
        _ => {
            tracing::warn!(
                "Unknown Mobile-ID provider '{}', using mock implementation",
                config.provider
            );
            Arc::new(MockMobileIdClient::from_config(config))
        }
    }
}

/// Create the response validator matching the configured provider
pub fn create_response_validator(config: &MobileIdConfig) -> Arc<dyn AuthenticationResponseValidator> {
    tracing::debug!(provider = %config.provider, "Creating Mobile-ID response validator");
    Arc::new(MockAuthenticationResponseValidator::new())
}
