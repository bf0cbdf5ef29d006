//! Authentication route handlers
//!
//! This module contains the Mobile-ID login endpoints:
//! - Starting a session and returning the verification code
//! - Completing the session and returning the identity

pub mod authenticate;
pub mod start;

use std::sync::Arc;

use mid_core::repositories::SessionStore;
use mid_core::services::mobile_id::AuthenticationServiceTrait;

/// Application state that holds shared services
pub struct AppState<S>
where
    S: AuthenticationServiceTrait + ?Sized,
{
    pub auth_service: Arc<S>,
    pub session_store: Arc<dyn SessionStore>,
}

impl<S> AppState<S>
where
    S: AuthenticationServiceTrait + ?Sized,
{
    pub fn new(auth_service: Arc<S>, session_store: Arc<dyn SessionStore>) -> Self {
        Self {
            auth_service,
            session_store,
        }
    }
}
