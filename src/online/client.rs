//! HTTP client for the online synthesis service.

use log::debug;

use super::OnlineSynth;
use super::types::{Language, OnlineError};

/// Default base URL for the hosted synthesis endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://translate.google.com";

/// Blocking HTTP client for the remote synthesizer.
///
/// The service is treated as a black box that maps (text, language) to an
/// MPEG audio payload. No retry and no timeout configuration beyond the
/// client defaults.
pub struct HttpClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpClient {
    /// Create a client against the given base URL.
    pub fn new(endpoint: &str) -> Self {
        Self {
            base_url: endpoint.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Get the base URL for this client.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl OnlineSynth for HttpClient {
    fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, OnlineError> {
        let url = format!("{}/translate_tts", self.base_url);
        debug!(
            "requesting synthesis: lang={} chars={}",
            language.code(),
            text.chars().count()
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language.code()),
                ("q", text),
            ])
            .send()
            .map_err(|e| OnlineError::ConnectionFailed(e.to_string()))?;

        // An unknown language code comes back as a client error status.
        if !response.status().is_success() {
            return Err(OnlineError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        let audio = response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| OnlineError::InvalidResponse(e.to_string()))?;

        if audio.is_empty() {
            return Err(OnlineError::InvalidResponse(
                "Empty audio payload".to_string(),
            ));
        }

        debug!("received {} bytes of audio", audio.len());
        Ok(audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_base_url() {
        let client = HttpClient::new("https://example.com");
        assert_eq!(client.base_url(), "https://example.com");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = HttpClient::new("https://example.com/");
        assert_eq!(client.base_url(), "https://example.com");
    }

    #[test]
    fn test_default_endpoint_is_absolute() {
        assert!(DEFAULT_ENDPOINT.starts_with("https://"));
        assert!(!DEFAULT_ENDPOINT.ends_with('/'));
    }
}
