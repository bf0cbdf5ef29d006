//! Configuration for the Mobile-ID authentication service

use crate::domain::value_objects::{DisplaySettings, DisplayTextFormat, Language};

/// Prompt shown on the phone while the user enters the PIN
pub const DEFAULT_DISPLAY_TEXT: &str = "Log in with MID demo?";

/// Status endpoint path template handed to the session status poller
pub const AUTHENTICATION_SESSION_STATUS_PATH: &str = "/mid-api/authentication/session/{sessionId}";

/// Configuration for the Mobile-ID authentication service
///
/// The defaults are the fixed demo settings: English dialog, the demo prompt
/// and the 7-bit GSM alphabet.
#[derive(Debug, Clone)]
pub struct AuthenticationServiceConfig {
    /// Language of the dialog on the phone
    pub language: Language,
    /// Prompt shown above the PIN entry
    pub display_text: String,
    /// Encoding of the prompt
    pub display_text_format: DisplayTextFormat,
}

impl Default for AuthenticationServiceConfig {
    fn default() -> Self {
        Self {
            language: Language::Eng,
            display_text: DEFAULT_DISPLAY_TEXT.to_string(),
            display_text_format: DisplayTextFormat::Gsm7,
        }
    }
}

impl AuthenticationServiceConfig {
    pub(crate) fn display_settings(&self) -> DisplaySettings {
        DisplaySettings {
            language: self.language,
            text: self.display_text.clone(),
            format: self.display_text_format,
        }
    }
}
