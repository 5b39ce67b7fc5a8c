//! Online service types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when talking to the online synthesis service.
#[derive(Error, Debug)]
pub enum OnlineError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Language codes accepted by the online service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    De,
    Zh,
    Hi,
    Ar,
    Ru,
}

impl Language {
    /// Every language the UI offers, in menu order.
    pub const ALL: [Language; 8] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::Zh,
        Language::Hi,
        Language::Ar,
        Language::Ru,
    ];

    /// Returns the ISO 639-1 code sent to the service.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Zh => "zh",
            Language::Hi => "hi",
            Language::Ar => "ar",
            Language::Ru => "ru",
        }
    }

    /// Human-readable name for the language menu.
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English (en)",
            Language::Es => "Spanish (es)",
            Language::Fr => "French (fr)",
            Language::De => "German (de)",
            Language::Zh => "Chinese (zh)",
            Language::Hi => "Hindi (hi)",
            Language::Ar => "Arabic (ar)",
            Language::Ru => "Russian (ru)",
        }
    }
}
