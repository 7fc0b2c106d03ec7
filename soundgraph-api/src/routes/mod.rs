//! HTTP routes.
//!
//! - `GET /` and `GET /health` - liveness probes
//! - `POST /music/generate` - compose audio from a graph or prompt
//! - `POST /graph/update` - translate an instruction into graph commands
//! - `POST /producer/analyze` - spoken producer feedback (audio)
//! - `POST /producer/analyze-text` - producer feedback, text only
//! - `POST /recommendations/generate` - instrument recommendations
//! - `POST /transcribe` - speech-to-text for an uploaded recording

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub mod graph;
pub mod health;
pub mod music;
pub mod producer;
pub mod recommendations;
pub mod transcribe;

/// Assemble the API router.
#[must_use]
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/music/generate", post(music::generate_music))
        .route("/graph/update", post(graph::update_graph))
        .route("/producer/analyze", post(producer::analyze))
        .route("/producer/analyze-text", post(producer::analyze_text))
        .route("/recommendations/generate", post(recommendations::generate))
        .route("/transcribe", post(transcribe::transcribe))
}
