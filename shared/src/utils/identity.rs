//! National identity number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Estonian and Lithuanian personal codes are 11 digits
static NATIONAL_IDENTITY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{11}$").unwrap());

/// Check if a national identity number has the expected shape
pub fn is_valid_national_identity_number(code: &str) -> bool {
    NATIONAL_IDENTITY_REGEX.is_match(code)
}

/// Mask an identity code for logs, keeping the leading digit and the last three
pub fn mask_identity_code(code: &str) -> String {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() < 6 {
        return "***".to_string();
    }
    let head: String = chars[..1].iter().collect();
    let tail: String = chars[chars.len() - 3..].iter().collect();
    format!("{}*******{}", head, tail)
}
