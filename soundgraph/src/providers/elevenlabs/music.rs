//! ElevenLabs music composition API implementation.

use super::client::ElevenLabsClient;
use super::collect_audio;
use crate::providers::{ApiClient, ProviderError, ProviderResult};
use bytes::Bytes;
use serde_json::json;
use tracing::{debug, instrument};

/// Lower bound on the requested track length, in milliseconds.
pub const MIN_DURATION_MS: u64 = 1_000;

/// Upper bound on the requested track length, in milliseconds.
pub const MAX_DURATION_MS: u64 = 120_000;

/// ElevenLabs music composition model.
#[derive(Debug, Clone)]
pub struct MusicModel {
    client: ElevenLabsClient,
}

impl MusicModel {
    pub(crate) const fn new(client: ElevenLabsClient) -> Self {
        Self { client }
    }

    /// Compose a music track for the given prompt.
    ///
    /// The streamed response is concatenated into one buffer; callers are
    /// expected to validate `duration_ms` against [`MIN_DURATION_MS`] and
    /// [`MAX_DURATION_MS`] before spending an API call.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingApiKey`] without credentials,
    /// [`ProviderError::Api`] for a non-success status, and
    /// [`ProviderError::EmptyAudio`] when the service streams zero bytes.
    #[instrument(skip(self, prompt))]
    pub async fn compose(&self, prompt: &str, duration_ms: u64) -> ProviderResult<Bytes> {
        let api_key = self.client.api_key()?;
        let url = format!("{}/v1/music", self.client.base_url());
        let body = json!({
            "prompt": prompt,
            "music_length_ms": duration_ms,
        });

        debug!("sending request to ElevenLabs music API");

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
    fn test_duration_bounds() {
        assert!(MIN_DURATION_MS < MAX_DURATION_MS);
        assert_eq!(MIN_DURATION_MS, 1_000);
        assert_eq!(MAX_DURATION_MS, 120_000);
    }

    #[tokio::test]
    async fn test_compose_without_key_fails_before_any_request() {
        let model = ElevenLabsClient::builder().build().music_model();
        let err = model.compose("lofi beat", 10_000).await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey));
    }
}
