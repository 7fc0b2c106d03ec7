//! Shared application state.

use crate::config::ApiConfig;
use soundgraph::providers::elevenlabs::{ElevenLabsClient, MusicModel, SpeechModel};
use soundgraph::providers::gemini::{CompletionModel, GeminiClient};
use soundgraph::providers::whisper::WhisperClient;

/// Per-process state handed to every handler.
///
/// Built once from [`ApiConfig`] at startup. Holds only read-only clients,
/// so nothing mutable crosses requests.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Text generation model.
    pub completion: CompletionModel,
    /// Music composition model.
    pub music: MusicModel,
    /// Speech synthesis model.
    pub speech: SpeechModel,
    /// Speech-to-text client.
    pub transcriber: WhisperClient,
}

impl AppState {
    /// Construct the provider clients from configuration.
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        let mut gemini = GeminiClient::builder();
        if let Some(key) = config.google_api_key.as_deref() {
            gemini = gemini.api_key(key);
        }
        let gemini = gemini.build();

        let mut elevenlabs = ElevenLabsClient::builder();
        if let Some(key) = config.elevenlabs_api_key.as_deref() {
            elevenlabs = elevenlabs.api_key(key);
        }
        let elevenlabs = elevenlabs.build();

        let mut whisper = WhisperClient::builder();
        if let Some(key) = config.groq_api_key.as_deref() {
            whisper = whisper.api_key(key);
        }

        Self {
            completion: gemini.completion_model(config.completion_model.clone()),
            music: elevenlabs.music_model(),
            speech: elevenlabs.speech_model(config.voice_id.clone(), config.speech_model.clone()),
            transcriber: whisper.build(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_builds_without_credentials() {
        let state = AppState::from_config(&ApiConfig::default());
        assert_eq!(state.completion.model_id(), "gemini-2.0-flash");
        assert_eq!(state.speech.voice_id(), "pNInz6obpgDQGcFmaJgB");
    }
}
