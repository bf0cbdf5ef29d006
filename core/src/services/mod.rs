//! Business services containing domain logic and use cases.

pub mod mobile_id;

// Re-export commonly used types
pub use mobile_id::{
    AuthenticationResponseValidator, AuthenticationServiceConfig, AuthenticationServiceTrait,
    MobileIdAuthenticationService, MobileIdClient, MobileIdConnector, SessionStatusPoller,
    AUTHENTICATION_SESSION_STATUS_PATH, DEFAULT_DISPLAY_TEXT,
};
