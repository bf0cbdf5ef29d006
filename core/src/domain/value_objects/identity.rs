//! Identity of an authenticated person

use serde::{Deserialize, Serialize};

/// Validated identity attributes returned after a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationIdentity {
    pub given_name: String,
    pub surname: String,
    pub identity_code: String,
    pub country: String,
}

impl AuthenticationIdentity {
    /// Read the identity from a certificate subject distinguished name
    ///
    /// Expects the attributes Mobile-ID certificates carry, e.g.
    /// `SERIALNUMBER=PNOEE-60001019906, GN=MARY ÄNN, SN=O’CONNEŽ-ŠUSLIK TESTNUMBER, C=EE`.
    /// The `PNO<country>-` semantics prefix is stripped from the serial number.
    /// Returns `None` if any of the four attributes is missing.
    pub fn from_subject_dn(subject: &str) -> Option<Self> {
        let mut serial_number = None;
        let mut given_name = None;
        let mut surname = None;
        let mut country = None;

        for part in subject.split(',') {
            let Some((key, value)) = part.split_once('=') else {
                continue;
            };
            let value = value.trim().to_string();
            match key.trim().to_uppercase().as_str() {
                "SERIALNUMBER" => serial_number = Some(value),
                "GN" | "GIVENNAME" => given_name = Some(value),
                "SN" | "SURNAME" => surname = Some(value),
                "C" => country = Some(value),
                _ => {}
            }
        }

        let serial_number = serial_number?;
        let identity_code = match serial_number.split_once('-') {
            Some((prefix, code)) if prefix.starts_with("PNO") => code.to_string(),
            _ => serial_number,
        };

        Some(Self {
            given_name: given_name?,
            surname: surname?,
            identity_code,
            country: country?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_subject_dn() {
        let identity = AuthenticationIdentity::from_subject_dn(
            "SERIALNUMBER=PNOEE-60001019906, GN=MARY ÄNN, SN=O’CONNEŽ-ŠUSLIK TESTNUMBER, C=EE",
        )
        .unwrap();

        assert_eq!(identity.given_name, "MARY ÄNN");
        assert_eq!(identity.surname, "O’CONNEŽ-ŠUSLIK TESTNUMBER");
        assert_eq!(identity.identity_code, "60001019906");
        assert_eq!(identity.country, "EE");
    }

    #[test]
    fn test_serial_number_without_prefix_is_kept() {
        let identity = AuthenticationIdentity::from_subject_dn(
            "C=LT,SN=TESTNUMBER,GN=JONAS,SERIALNUMBER=50001018865",
        )
        .unwrap();

        assert_eq!(identity.identity_code, "50001018865");
        assert_eq!(identity.country, "LT");
    }

    #[test]
    fn test_missing_attribute() {
        assert!(AuthenticationIdentity::from_subject_dn("SERIALNUMBER=PNOEE-60001019906, GN=MARY, C=EE")
            .is_none());
        assert!(AuthenticationIdentity::from_subject_dn("").is_none());
    }
}
