//! Display language and text encoding of the prompt shown on the phone

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language of the Mobile-ID dialog on the user's phone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    #[default]
    Eng,
    Est,
    Rus,
    Lit,
}

impl Language {
    /// Three letter code used on the wire
    pub fn code(&self) -> &'static str {
        match self {
            Language::Eng => "ENG",
            Language::Est => "EST",
            Language::Rus => "RUS",
            Language::Lit => "LIT",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ENG" | "EN" => Ok(Language::Eng),
            "EST" | "ET" => Ok(Language::Est),
            "RUS" | "RU" => Ok(Language::Rus),
            "LIT" | "LT" => Ok(Language::Lit),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

/// Character encoding of the display text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayTextFormat {
    /// 7-bit GSM default alphabet
    #[default]
    #[serde(rename = "GSM7")]
    Gsm7,
    /// 16-bit UCS-2, needed for characters outside GSM-7
    #[serde(rename = "UCS2")]
    Ucs2,
}

impl DisplayTextFormat {
    pub fn name(&self) -> &'static str {
        match self {
            DisplayTextFormat::Gsm7 => "GSM7",
            DisplayTextFormat::Ucs2 => "UCS2",
        }
    }
}

impl fmt::Display for DisplayTextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_wire_format() {
        assert_eq!(serde_json::to_string(&Language::Eng).unwrap(), "\"ENG\"");
        assert_eq!(serde_json::to_string(&Language::Lit).unwrap(), "\"LIT\"");
        assert_eq!(Language::default(), Language::Eng);
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("eng".parse::<Language>().unwrap(), Language::Eng);
        assert_eq!("et".parse::<Language>().unwrap(), Language::Est);
        assert!("fin".parse::<Language>().is_err());
    }

    #[test]
    fn test_display_text_format_wire_format() {
        assert_eq!(serde_json::to_string(&DisplayTextFormat::Gsm7).unwrap(), "\"GSM7\"");
        assert_eq!(DisplayTextFormat::Ucs2.to_string(), "UCS2");
    }
}
