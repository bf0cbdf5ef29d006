pub mod error;

pub use error::{
    handle_domain_error, handle_mid_auth_error, handle_validation_error,
    handle_validation_errors,
};
