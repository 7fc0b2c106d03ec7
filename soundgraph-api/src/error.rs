//! Error handling for the HTTP surface.
//!
//! Every failure is reported synchronously on the request that caused it,
//! as a JSON problem body. Client input problems and missing credentials
//! map to 400, upstream failures (service errors, malformed model output,
//! empty audio) to 502, everything else to a generic 500 that never leaks
//! internals.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use soundgraph::ExtractionError;
use soundgraph::providers::ProviderError;
use tracing::error;

/// Result type alias for handler code.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Application error type, mapped onto the HTTP status taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body failed validation.
    #[error("invalid request: {0}")]
    BadRequest(String),

    /// A provider this endpoint needs has no credentials configured.
    #[error("service not configured: {0}")]
    Unconfigured(String),

    /// An upstream generation service failed or answered malformed data.
    #[error("upstream service error: {0}")]
    Upstream(String),

    /// Unclassified failure; the detail is logged, not returned.
    #[error("internal server error")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Unconfigured(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable detail for the response body.
    fn detail(&self) -> String {
        match self {
            // Never expose internals to the caller.
            Self::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MissingApiKey => Self::Unconfigured(err.to_string()),
            other => Self::Upstream(other.to_string()),
        }
    }
}

impl From<ExtractionError> for ApiError {
    fn from(err: ExtractionError) -> Self {
        Self::Upstream(err.to_string())
    }
}

/// JSON problem body returned with every error status.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Short status title.
    pub title: String,
    /// HTTP status code.
    pub status: u16,
    /// Human-readable message.
    pub detail: String,
}

impl ErrorResponse {
    fn from_error(err: &ApiError) -> Self {
        let status = err.status_code();
        Self {
            title: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            status: status.as_u16(),
            detail: err.detail(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(detail) => error!(detail = %detail, "internal error"),
            ApiError::Upstream(detail) => error!(detail = %detail, "upstream failure"),
            _ => {}
        }
        let status = self.status_code();
        (status, Json(ErrorResponse::from_error(&self))).into_response()
    }
}
