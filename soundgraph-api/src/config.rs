//! Service configuration, read once at process start.
//!
//! There is no runtime-wide singleton: `main` builds one [`ApiConfig`],
//! turns it into an [`crate::state::AppState`], and hands that to the
//! router. Credentials come from the process environment; an absent key
//! leaves the corresponding provider unconfigured and its endpoints
//! answering 400.

use soundgraph::providers::elevenlabs::{DEFAULT_SPEECH_MODEL, DEFAULT_VOICE_ID};

/// Default Gemini completion model.
pub const DEFAULT_COMPLETION_MODEL: &str = "gemini-2.0-flash";

/// Runtime configuration for the API service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Gemini API key (`GOOGLE_API_KEY`).
    pub google_api_key: Option<String>,
    /// ElevenLabs API key (`ELEVENLABS_API_KEY`).
    pub elevenlabs_api_key: Option<String>,
    /// Groq API key for Whisper transcription (`GROQ_API_KEY`).
    pub groq_api_key: Option<String>,
    /// Completion model id.
    pub completion_model: String,
    /// Voice used for spoken producer feedback.
    pub voice_id: String,
    /// Speech synthesis model id.
    pub speech_model: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            elevenlabs_api_key: None,
            groq_api_key: None,
            completion_model: DEFAULT_COMPLETION_MODEL.to_string(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            speech_model: DEFAULT_SPEECH_MODEL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            google_api_key: std::env::var("GOOGLE_API_KEY").ok(),
            elevenlabs_api_key: std::env::var("ELEVENLABS_API_KEY").ok(),
            groq_api_key: std::env::var("GROQ_API_KEY").ok(),
            completion_model: std::env::var("SOUNDGRAPH_COMPLETION_MODEL")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_MODEL.to_string()),
            voice_id: std::env::var("SOUNDGRAPH_VOICE_ID")
                .unwrap_or_else(|_| DEFAULT_VOICE_ID.to_string()),
            speech_model: std::env::var("SOUNDGRAPH_SPEECH_MODEL")
                .unwrap_or_else(|_| DEFAULT_SPEECH_MODEL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_credentials() {
        let config = ApiConfig::default();
        assert!(config.google_api_key.is_none());
        assert!(config.elevenlabs_api_key.is_none());
        assert!(config.groq_api_key.is_none());
        assert_eq!(config.completion_model, DEFAULT_COMPLETION_MODEL);
        assert_eq!(config.speech_model, DEFAULT_SPEECH_MODEL);
    }
}
