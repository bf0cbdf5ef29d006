//! Structural validator for authentications produced by the development client
//!
//! Checks the shape of the response and reads the identity from the
//! certificate subject. Signatures and certificate chains are not verified.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use mid_core::domain::value_objects::{
    AuthenticationIdentity, AuthenticationResult, MobileIdAuthentication,
};
use mid_core::services::mobile_id::AuthenticationResponseValidator;

/// Validator accepting well-formed authentications without cryptographic checks
#[derive(Debug, Clone, Default)]
pub struct MockAuthenticationResponseValidator;

impl MockAuthenticationResponseValidator {
    pub fn new() -> Self {
        Self
    }
}

impl AuthenticationResponseValidator for MockAuthenticationResponseValidator {
    fn validate(&self, authentication: &MobileIdAuthentication) -> AuthenticationResult {
        let mut result = AuthenticationResult {
            valid: true,
            identity: None,
            errors: Vec::new(),
        };

        if !authentication.result.eq_ignore_ascii_case("OK") {
            result.add_error(format!(
                "Response result verification failed: {}",
                authentication.result
            ));
        }

        if authentication.signature_value_in_base64.is_empty()
            || STANDARD
                .decode(&authentication.signature_value_in_base64)
                .is_err()
        {
            result.add_error("Signature verification failed");
        }

        match authentication.certificate.as_deref() {
            None | Some("") => result.add_error("Signer's certificate not found"),
            Some(certificate) => match decode_subject(certificate) {
                Some(subject) => match AuthenticationIdentity::from_subject_dn(&subject) {
                    Some(identity) => result.identity = Some(identity),
                    None => result.add_error("Certificate subject is missing identity attributes"),
                },
                None => result.add_error("Signer's certificate could not be decoded"),
            },
        }

        if !result.errors.is_empty() {
            result.identity = None;
            tracing::warn!(
                target: "mobile_id",
                errors = ?result.errors,
                event = "mid_response_rejected",
                "Authentication response failed validation"
            );
        }

        result
    }
}

fn decode_subject(certificate: &str) -> Option<String> {
    let bytes = STANDARD.decode(certificate).ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mid_core::domain::value_objects::HashType;

    const SUBJECT: &str =
        "SERIALNUMBER=PNOEE-60001019906, GN=MARY ÄNN, SN=O’CONNEŽ-ŠUSLIK TESTNUMBER, C=EE";

    fn authentication() -> MobileIdAuthentication {
        MobileIdAuthentication {
            result: "OK".to_string(),
            signature_value_in_base64: "c2lnbmF0dXJl".to_string(),
            algorithm_name: "SHA256WithECEncryption".to_string(),
            certificate: Some(STANDARD.encode(SUBJECT)),
            signed_hash_in_base64: "+/8=".to_string(),
            hash_type: HashType::Sha256,
        }
    }

    #[test]
    fn test_valid_authentication() {
        let result = MockAuthenticationResponseValidator::new().validate(&authentication());

        assert!(result.is_valid());
        assert!(result.errors.is_empty());
        let identity = result.identity.unwrap();
        assert_eq!(identity.given_name, "MARY ÄNN");
        assert_eq!(identity.surname, "O’CONNEŽ-ŠUSLIK TESTNUMBER");
        assert_eq!(identity.identity_code, "60001019906");
        assert_eq!(identity.country, "EE");
    }

    #[test]
    fn test_missing_certificate() {
        let mut authentication = authentication();
        authentication.certificate = None;

        let result = MockAuthenticationResponseValidator::new().validate(&authentication);

        assert!(!result.is_valid());
        assert!(result.identity.is_none());
        assert_eq!(result.errors, vec!["Signer's certificate not found".to_string()]);
    }

    #[test]
    fn test_collects_every_error() {
        let mut authentication = authentication();
        authentication.result = "USER_CANCELLED".to_string();
        authentication.signature_value_in_base64 = "not base64!".to_string();
        authentication.certificate = Some(STANDARD.encode("CN=nobody"));

        let result = MockAuthenticationResponseValidator::new().validate(&authentication);

        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 3);
        assert!(result.identity.is_none());
    }

    #[test]
    fn test_undecodable_certificate() {
        let mut authentication = authentication();
        authentication.certificate = Some("%%%".to_string());

        let result = MockAuthenticationResponseValidator::new().validate(&authentication);

        assert_eq!(
            result.errors,
            vec!["Signer's certificate could not be decoded".to_string()]
        );
    }
}
