//! Domain entities representing the login flow.

pub mod session_info;
pub mod user_request;


// Re-export commonly used types
pub use session_info::AuthenticationSessionInfo;
pub use user_request::UserRequest;
