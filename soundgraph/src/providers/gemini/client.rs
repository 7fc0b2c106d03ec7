//! Gemini API client implementation.
//!
//! Provides a client for the Generative Language API's `generateContent`
//! endpoint.

use super::completion::CompletionModel;
use crate::providers::{ApiClient, ProviderError, ProviderResult, build_http_client};
use std::sync::Arc;

/// Default Gemini API base URL.
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini API client for creating completion models.
///
/// # Example
///
/// ```rust,ignore
/// use soundgraph::providers::gemini::GeminiClient;
///
/// // From the GOOGLE_API_KEY environment variable
/// let client = GeminiClient::from_env();
///
/// // With an explicit API key
/// let client = GeminiClient::new("AIza...");
///
/// let model = client.completion_model("gemini-2.0-flash");
/// ```
#[derive(Clone)]
pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: Option<Arc<str>>,
    base_url: Arc<str>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client from the `GOOGLE_API_KEY` environment variable.
    ///
    /// The key may be absent; calls on a keyless client fail with
    /// [`ProviderError::MissingApiKey`].
    #[must_use]
    pub fn from_env() -> Self {
        let mut builder = Self::builder();
        if let Ok(key) = std::env::var("GOOGLE_API_KEY") {
            builder = builder.api_key(key);
        }
        builder.build()
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> GeminiClientBuilder {
        GeminiClientBuilder::default()
    }

    /// Create a completion model with the specified model id.
    #[must_use]
    pub fn completion_model(&self, model_id: impl Into<String>) -> CompletionModel {
        CompletionModel::new(self.clone(), model_id)
    }
}

impl ApiClient for GeminiClient {
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

/// Builder for [`GeminiClient`].
#[derive(Debug, Default)]
pub struct GeminiClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl GeminiClientBuilder {
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
    pub fn build(self) -> GeminiClient {
        let base_url = self
            .base_url
            .unwrap_or_else(|| GEMINI_API_BASE_URL.to_string());

        GeminiClient {
            http_client: build_http_client(self.timeout_secs),
            api_key: self.api_key.map(Into::into),
            base_url: base_url.into(),
        }
    }
}
