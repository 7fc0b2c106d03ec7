//! Clients for the external generation services.
//!
//! Each client is a stateless call-through: build the request, send it,
//! check the status, parse the payload. Failures propagate to the caller
//! as [`ProviderError`]; there is no retry, backoff, or circuit breaking.
//!
//! API keys are optional at construction time. A client built without a
//! key stays usable, but every call fails with
//! [`ProviderError::MissingApiKey`] until one is supplied, which lets the
//! service start with a partial credential set.

mod error;
mod options;

pub mod elevenlabs;
pub mod gemini;
pub mod whisper;

pub use elevenlabs::ElevenLabsClient;
pub use error::{ProviderError, ProviderResult};
pub use gemini::GeminiClient;
pub use options::GenerateOptions;
pub use whisper::WhisperClient;

/// Base configuration for HTTP API clients.
pub trait ApiClient: Clone + Send + Sync {
    /// Get the base URL for API requests.
    fn base_url(&self) -> &str;

    /// Get the HTTP client instance.
    fn http_client(&self) -> &reqwest::Client;

    /// Get the configured API key.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingApiKey`] when the client was built
    /// without credentials.
    fn api_key(&self) -> ProviderResult<&str>;
}

/// Build a reqwest client with an optional request timeout.
pub(crate) fn build_http_client(timeout_secs: Option<u64>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout_secs {
        builder = builder.timeout(std::time::Duration::from_secs(timeout));
    }
    builder.build().expect("failed to build HTTP client")
}
