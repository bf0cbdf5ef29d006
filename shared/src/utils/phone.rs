//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Mobile-ID accepts a '+' followed by 8 to 30 digits
static MID_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+\d{8,30}$").unwrap());

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is acceptable for a Mobile-ID request
///
/// The number is checked as given; normalize it first if it may contain
/// spaces or dashes.
pub fn is_valid_mid_phone_number(phone: &str) -> bool {
    MID_PHONE_REGEX.is_match(phone)
}

/// Mask a phone number for display (e.g., +37****0766)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
