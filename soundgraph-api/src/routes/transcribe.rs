//! Transcription endpoint: POST /transcribe

use crate::error::{ApiError, Result};
use crate::state::AppState;
use axum::extract::{Multipart, State};
use axum::response::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

/// Transcription response.
#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    /// The transcribed text.
    text: String,
}

/// POST /transcribe - speech-to-text for an uploaded recording.
///
/// Expects a multipart form with a `file` part carrying the audio.
pub async fn transcribe(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<TranscribeResponse>> {
    let (filename, data) = read_file_part(&mut multipart).await?;
    if data.is_empty() {
        return Err(ApiError::BadRequest("uploaded file is empty".to_string()));
    }

    info!(filename = %filename, bytes = data.len(), "transcribing upload");
    let text = state.transcriber.transcribe(&data, &filename).await?;

    Ok(Json(TranscribeResponse { text }))
}

/// Pull the `file` part out of the upload.
async fn read_file_part(multipart: &mut Multipart) -> Result<(String, Bytes)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::BadRequest(format!("malformed multipart body: {err}")))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .unwrap_or("recording.webm")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|err| ApiError::BadRequest(format!("failed to read upload: {err}")))?;
            return Ok((filename, data));
        }
    }

    Err(ApiError::BadRequest(
        "missing required `file` field".to_string(),
    ))
}
