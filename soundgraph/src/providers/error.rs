//! Error types shared by the provider clients.

/// Errors produced by the external generation services.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// API key not configured.
    #[error("API key not configured")]
    MissingApiKey,

    /// The remote service answered with a non-success status.
    #[error("API error: HTTP {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body text, as returned by the service.
        body: String,
    },

    /// Transport-level failure (connect, timeout, body read).
    #[error("request error: {0}")]
    Request(String),

    /// The service produced zero audio bytes.
    #[error("empty audio payload")]
    EmptyAudio,

    /// The response payload did not have the expected shape.
    #[error("unexpected response shape: {0}")]
    UnexpectedResponse(String),

    /// Unsupported audio format.
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

impl ProviderError {
    /// Build an [`ProviderError::Api`] from a non-success response,
    /// consuming its body for the message.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        Self::Api { status, body }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}
