//! ElevenLabs text-to-speech API implementation.

use super::client::ElevenLabsClient;
use super::collect_audio;
use crate::providers::{ApiClient, ProviderError, ProviderResult};
use bytes::Bytes;
use serde_json::json;
use tracing::{debug, instrument};

/// Default voice for spoken feedback (Adam).
pub const DEFAULT_VOICE_ID: &str = "pNInz6obpgDQGcFmaJgB";

/// Default synthesis model.
pub const DEFAULT_SPEECH_MODEL: &str = "eleven_turbo_v2_5";

/// ElevenLabs speech synthesis model.
#[derive(Debug, Clone)]
pub struct SpeechModel {
    client: ElevenLabsClient,
    voice_id: String,
    model_id: String,
}

impl SpeechModel {
    pub(crate) fn new(
        client: ElevenLabsClient,
        voice_id: impl Into<String>,
        model_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            voice_id: voice_id.into(),
            model_id: model_id.into(),
        }
    }

    /// Get the configured voice id.
    #[must_use]
    pub fn voice_id(&self) -> &str {
        &self.voice_id
    }

    /// Synthesize speech for the given text.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingApiKey`] without credentials,
    /// [`ProviderError::Api`] for a non-success status, and
    /// [`ProviderError::EmptyAudio`] when the service streams zero bytes.
    #[instrument(skip(self, text), fields(voice = %self.voice_id, model = %self.model_id))]
    pub async fn synthesize(&self, text: &str) -> ProviderResult<Bytes> {
        let api_key = self.client.api_key()?;
        let url = format!(
            "{}/v1/text-to-speech/{}",
            self.client.base_url(),
            self.voice_id
        );
        let body = json!({
            "text": text,
            "model_id": self.model_id,
        });

        debug!(text_len = text.len(), "sending request to ElevenLabs TTS API");

        let response = self
            .client
            .http_client()
            .post(&url)
            .header("xi-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::from_response(response).await);
        }

        collect_audio(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_model_configuration() {
        let model = ElevenLabsClient::new("key").speech_model(DEFAULT_VOICE_ID, DEFAULT_SPEECH_MODEL);
        assert_eq!(model.voice_id(), "pNInz6obpgDQGcFmaJgB");
    }

    #[tokio::test]
    async fn test_synthesize_without_key_fails_before_any_request() {
        let model = ElevenLabsClient::builder()
            .build()
            .speech_model(DEFAULT_VOICE_ID, DEFAULT_SPEECH_MODEL);
        let err = model.synthesize("hello").await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey));
    }
}
