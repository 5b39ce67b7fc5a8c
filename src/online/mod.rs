//! Online speech synthesis over HTTP.
//!
//! Provides the trait and blocking client for the remote synthesis
//! service used by the Speak-Online and Save-As-File operations.

mod client;
mod types;

pub use client::{DEFAULT_ENDPOINT, HttpClient};
pub use types::{Language, OnlineError};

/// Trait for the remote synthesis call.
///
/// Abstracts the HTTP communication so the dispatcher can be tested
/// against a mock implementation.
#[cfg_attr(test, mockall::automock)]
pub trait OnlineSynth {
    /// Synthesize speech from text.
    ///
    /// # Arguments
    /// * `text` - Text to speak (non-empty)
    /// * `language` - Language code for the voice
    ///
    /// # Returns
    /// Raw MPEG audio data
    fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, OnlineError>;
}

/// Create a client for the given service endpoint.
pub fn create_client(endpoint: &str) -> HttpClient {
    HttpClient::new(endpoint)
}
