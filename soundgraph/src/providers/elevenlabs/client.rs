//! ElevenLabs API client implementation.

use super::music::MusicModel;
use super::speech::SpeechModel;
use crate::providers::{ApiClient, ProviderError, ProviderResult, build_http_client};
use std::sync::Arc;

/// Default ElevenLabs API base URL.
pub const ELEVENLABS_API_BASE_URL: &str = "https://api.elevenlabs.io";

/// ElevenLabs API client for creating music and speech models.
///
/// # Example
///
/// ```rust,ignore
/// use soundgraph::providers::elevenlabs::ElevenLabsClient;
///
/// let client = ElevenLabsClient::from_env();
/// let music = client.music_model();
/// let speech = client.speech_model("pNInz6obpgDQGcFmaJgB", "eleven_turbo_v2_5");
/// ```
#[derive(Clone)]
pub struct ElevenLabsClient {
    http_client: reqwest::Client,
    api_key: Option<Arc<str>>,
    base_url: Arc<str>,
}

impl std::fmt::Debug for ElevenLabsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElevenLabsClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl ElevenLabsClient {
    /// Create a new ElevenLabs client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client from the `ELEVENLABS_API_KEY` environment variable.
    ///
    /// The key may be absent; calls on a keyless client fail with
    /// [`ProviderError::MissingApiKey`].
    #[must_use]
    pub fn from_env() -> Self {
        let mut builder = Self::builder();
        if let Ok(key) = std::env::var("ELEVENLABS_API_KEY") {
            builder = builder.api_key(key);
        }
        builder.build()
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> ElevenLabsClientBuilder {
        ElevenLabsClientBuilder::default()
    }

    /// Create a music composition model.
    #[must_use]
    pub fn music_model(&self) -> MusicModel {
        MusicModel::new(self.clone())
    }

    /// Create a speech synthesis model for the given voice and model ids.
    #[must_use]
    pub fn speech_model(
        &self,
        voice_id: impl Into<String>,
        model_id: impl Into<String>,
    ) -> SpeechModel {
        SpeechModel::new(self.clone(), voice_id, model_id)
    }
}

impl ApiClient for ElevenLabsClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    fn api_key(&self) -> ProviderResult<&str> {
        self.api_key
            .as_deref()
            .ok_or(ProviderError::MissingApiKey)
    }
}

/// Builder for [`ElevenLabsClient`].
#[derive(Debug, Default)]
pub struct ElevenLabsClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl ElevenLabsClientBuilder {
    /// Set the API key.
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set a custom base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub const fn timeout_secs(mut self, timeout: u64) -> Self {
        self.timeout_secs = Some(timeout);
        self
    }

    /// Build the client.
    #[must_use]
    pub fn build(self) -> ElevenLabsClient {
        let base_url = self
            .base_url
            .unwrap_or_else(|| ELEVENLABS_API_BASE_URL.to_string());

        ElevenLabsClient {
            http_client: build_http_client(self.timeout_secs),
            api_key: self.api_key.map(Into::into),
            base_url: base_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = ElevenLabsClient::builder()
            .api_key("test-key")
            .base_url("https://custom.api.com")
            .build();
        assert_eq!(client.base_url(), "https://custom.api.com");
        assert_eq!(client.api_key().unwrap(), "test-key");
    }

    #[test]
    fn test_default_base_url() {
        let client = ElevenLabsClient::new("test-key");
        assert_eq!(client.base_url(), ELEVENLABS_API_BASE_URL);
    }

    #[test]
    fn test_keyless_client_reports_missing_key() {
        let client = ElevenLabsClient::builder().build();
        assert!(matches!(
            client.api_key(),
            Err(ProviderError::MissingApiKey)
        ));
    }
}
