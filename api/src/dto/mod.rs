pub mod auth;
pub mod error;

pub use auth::{
    AuthenticateRequest, IdentityResponse, StartAuthenticationRequest,
    StartAuthenticationResponse,
};
pub use error::{ErrorResponse, ErrorResponseExt};
