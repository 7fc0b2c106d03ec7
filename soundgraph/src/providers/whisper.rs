//! Whisper speech-to-text via Groq's hosted endpoint.
//!
//! Accepts an in-memory audio buffer plus its filename, uploads it as a
//! multipart form, and returns the transcribed text.

use crate::providers::{ApiClient, ProviderError, ProviderResult, build_http_client};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

/// Default Whisper API base URL.
pub const WHISPER_API_BASE_URL: &str = "https://api.groq.com";

/// Default Whisper model.
pub const DEFAULT_WHISPER_MODEL: &str = "whisper-large-v3-turbo";

/// Supported audio formats for transcription uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    /// MP3 audio.
    Mp3,
    /// MP4/M4A audio.
    Mp4,
    /// MPEG audio.
    Mpeg,
    /// OGG audio.
    Ogg,
    /// WAV audio.
    Wav,
    /// WebM audio (what browser recorders typically produce).
    Webm,
}

impl AudioFormat {
    /// Detect format from a file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "mp3" | "mpga" => Some(Self::Mp3),
            "mp4" | "m4a" => Some(Self::Mp4),
            "mpeg" => Some(Self::Mpeg),
            "ogg" | "oga" | "opus" => Some(Self::Ogg),
            "wav" => Some(Self::Wav),
            "webm" => Some(Self::Webm),
            _ => None,
        }
    }

    /// Get the MIME type for this format.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Mp3 | Self::Mpeg => "audio/mpeg",
            Self::Mp4 => "audio/mp4",
            Self::Ogg => "audio/ogg",
            Self::Wav => "audio/wav",
            Self::Webm => "audio/webm",
        }
    }
}

/// Whisper transcription client.
#[derive(Clone)]
pub struct WhisperClient {
    http_client: reqwest::Client,
    api_key: Option<Arc<str>>,
    base_url: Arc<str>,
    model: String,
}

impl std::fmt::Debug for WhisperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhisperClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl WhisperClient {
    /// Create a new Whisper client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client from the `GROQ_API_KEY` environment variable.
    ///
    /// The key may be absent; calls on a keyless client fail with
    /// [`ProviderError::MissingApiKey`].
    #[must_use]
    pub fn from_env() -> Self {
        let mut builder = Self::builder();
        if let Ok(key) = std::env::var("GROQ_API_KEY") {
            builder = builder.api_key(key);
        }
        builder.build()
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> WhisperClientBuilder {
        WhisperClientBuilder::default()
    }

    /// Transcribe an audio buffer.
    ///
    /// The filename's extension decides the upload MIME type.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingApiKey`] without credentials,
    /// [`ProviderError::UnsupportedFormat`] for an unknown extension, and
    /// [`ProviderError::Api`] for a non-success status.
    #[instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn transcribe(&self, data: &[u8], filename: &str) -> ProviderResult<String> {
        let api_key = self.api_key()?;

        let extension = filename.rsplit('.').next().unwrap_or("webm");
        let format = AudioFormat::from_extension(extension)
            .ok_or_else(|| ProviderError::UnsupportedFormat(extension.to_string()))?;

        let file_part = Part::bytes(data.to_vec())
            .file_name(filename.to_string())
            .mime_str(format.mime_type())
            .map_err(|err| ProviderError::Request(err.to_string()))?;

        let form = Form::new()
            .part("file", file_part)
            .text("model", self.model.clone())
            .text("response_format", "json");

        let url = format!("{}/openai/v1/audio/transcriptions", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::from_response(response).await);
        }

        let json: Value = response.json().await?;
        let text = json["text"].as_str().unwrap_or("").to_string();

        info!(text_len = text.len(), "transcription complete");
        Ok(text)
    }
}

impl ApiClient for WhisperClient {
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

/// Builder for [`WhisperClient`].
#[derive(Debug, Default)]
pub struct WhisperClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
}

impl WhisperClientBuilder {
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

    /// Set the model to use.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Build the client.
    #[must_use]
    pub fn build(self) -> WhisperClient {
        WhisperClient {
            http_client: build_http_client(None),
            api_key: self.api_key.map(Into::into),
            base_url: self
                .base_url
                .unwrap_or_else(|| WHISPER_API_BASE_URL.to_string())
                .into(),
            model: self
                .model
                .unwrap_or_else(|| DEFAULT_WHISPER_MODEL.to_string()),
        }
    }
}
