//! Music generation endpoint: POST /music/generate

use crate::error::{ApiError, Result};
use crate::state::AppState;
use axum::extract::{Json, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;
use soundgraph::Graph;
use soundgraph::graph::music_prompt;
use soundgraph::providers::elevenlabs::{MAX_DURATION_MS, MIN_DURATION_MS};
use tracing::info;

const DEFAULT_DURATION_MS: u64 = 10_000;

/// Request payload for music generation.
///
/// Either `graph` or `prompt` must be present; the graph wins when both
/// are supplied.
#[derive(Debug, Deserialize)]
pub struct MusicGenerateRequest {
    /// Composition graph to describe (preferred).
    #[serde(default, alias = "graph_data")]
    graph: Option<Graph>,
    /// Direct text prompt fallback.
    #[serde(default)]
    prompt: Option<String>,
    /// Requested track length in milliseconds.
    #[serde(default = "default_duration_ms")]
    duration_ms: u64,
}

const fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

/// POST /music/generate - stream composed audio back to the client.
pub async fn generate_music(
    State(state): State<AppState>,
    Json(request): Json<MusicGenerateRequest>,
) -> Result<impl IntoResponse> {
    let prompt = resolve_prompt(&request)?;
    info!(duration_ms = request.duration_ms, prompt = %prompt, "generating music");

    let audio = state.music.compose(&prompt, request.duration_ms).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "audio/mpeg"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=generated_music.mp3",
            ),
        ],
        audio,
    ))
}

/// Validate the request and pick the generation prompt. Runs before any
/// external call is attempted.
fn resolve_prompt(request: &MusicGenerateRequest) -> Result<String> {
    if !(MIN_DURATION_MS..=MAX_DURATION_MS).contains(&request.duration_ms) {
        return Err(ApiError::BadRequest(format!(
            "duration_ms must be between {MIN_DURATION_MS} and {MAX_DURATION_MS}"
        )));
    }

    if let Some(graph) = &request.graph {
        return Ok(music_prompt(graph));
    }
    match request.prompt.as_deref() {
        Some(prompt) if !prompt.trim().is_empty() => Ok(prompt.to_string()),
        _ => Err(ApiError::BadRequest(
            "either graph or prompt must be provided".to_string(),
        )),
    }
}
