//! Value objects representing immutable domain concepts.

pub mod authentication;
pub mod authentication_request;
pub mod hash_to_sign;
pub mod identity;
pub mod language;
pub mod session_status;

// Re-export commonly used types
pub use authentication::{AuthenticationResult, MobileIdAuthentication};
pub use authentication_request::{
    AuthenticationRequest, AuthenticationResponse, DisplaySettings, RelyingParty,
};
pub use hash_to_sign::{AuthenticationHash, HashType, VerificationCode};
pub use identity::AuthenticationIdentity;
pub use language::{DisplayTextFormat, Language};
pub use session_status::{SessionSignature, SessionStatus};
