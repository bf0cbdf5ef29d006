//! Mobile-ID authentication service module
//!
//! This module drives the two-phase Mobile-ID login:
//! - Session start: random hash, verification code, no network traffic
//! - Session completion: request submission, final status, response validation
//! - Translation of every failure into a single `MidAuthError`

mod config;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::{
    AuthenticationServiceConfig, AUTHENTICATION_SESSION_STATUS_PATH, DEFAULT_DISPLAY_TEXT,
};
pub use service::MobileIdAuthenticationService;
pub use traits::{
    AuthenticationResponseValidator, AuthenticationServiceTrait, MobileIdClient,
    MobileIdConnector, SessionStatusPoller,
};
