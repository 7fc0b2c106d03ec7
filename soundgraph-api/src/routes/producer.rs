//! Producer feedback endpoints: POST /producer/analyze, POST /producer/analyze-text

use crate::error::Result;
use crate::state::AppState;
use axum::extract::{Json, State};
use axum::http::header::{self, HeaderValue};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use soundgraph::prompt::producer_prompt;
use soundgraph::providers::GenerateOptions;
use soundgraph::{Edge, Graph, Node};
use tracing::info;

// Higher temperature than command generation: feedback should read like a
// person, and stays short.
const FEEDBACK_OPTIONS: GenerateOptions = GenerateOptions::new()
    .with_temperature(0.7)
    .with_top_p(0.9)
    .with_max_output_tokens(200);

/// Request payload for producer analysis.
#[derive(Debug, Deserialize)]
pub struct ProducerAnalyzeRequest {
    /// Nodes of the composition graph.
    nodes: Vec<Node>,
    /// Edges of the composition graph.
    edges: Vec<Edge>,
    /// Optional context about recent changes ("just added drums").
    #[serde(default)]
    context: Option<String>,
}

/// Text-only analysis response.
#[derive(Debug, Serialize)]
pub struct ProducerAnalyzeResponse {
    /// The producer's feedback.
    feedback_text: String,
    /// Whether audio accompanies the feedback.
    audio_available: bool,
}

/// POST /producer/analyze - spoken feedback as an audio stream, with the
/// underlying text echoed in the `X-Feedback-Text` header.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<ProducerAnalyzeRequest>,
) -> Result<Response> {
    info!(
        nodes = request.nodes.len(),
        edges = request.edges.len(),
        "producer analyze request"
    );

    let feedback = feedback_text(&state, &request).await?;
    let audio = state.speech.synthesize(&feedback).await?;

    let mut response = (
        [
            (header::CONTENT_TYPE, "audio/mpeg"),
            (
                header::CONTENT_DISPOSITION,
                "inline; filename=producer_feedback.mp3",
            ),
        ],
        audio,
    )
        .into_response();

    // Header values must be a single visible-ASCII line; skip the header
    // rather than fail the request if the text cannot be represented.
    if let Ok(value) = HeaderValue::from_str(&sanitize_header_text(&feedback)) {
        response
            .headers_mut()
            .insert("x-feedback-text", value);
    }

    Ok(response)
}

/// POST /producer/analyze-text - feedback without voice generation.
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(request): Json<ProducerAnalyzeRequest>,
) -> Result<Json<ProducerAnalyzeResponse>> {
    let feedback = feedback_text(&state, &request).await?;
    Ok(Json(ProducerAnalyzeResponse {
        feedback_text: feedback,
        audio_available: false,
    }))
}

/// Shared analysis step: build the prompt and ask the model.
async fn feedback_text(state: &AppState, request: &ProducerAnalyzeRequest) -> Result<String> {
    let graph = Graph::new(request.nodes.clone(), request.edges.clone());
    let prompt = producer_prompt(&graph, request.context.as_deref());
    let feedback = state.completion.generate(&prompt, &FEEDBACK_OPTIONS).await?;
    info!(feedback_len = feedback.len(), "generated producer feedback");
    Ok(feedback)
}

fn sanitize_header_text(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_header_text() {
        assert_eq!(sanitize_header_text("plain feedback"), "plain feedback");
        assert_eq!(sanitize_header_text("line\r\nbreak"), "line  break");
        assert_eq!(sanitize_header_text("caf\u{e9}"), "caf ");
    }

    #[test]
    fn test_request_accepts_missing_context() {
        let request: ProducerAnalyzeRequest =
            serde_json::from_str(r#"{"nodes": [], "edges": []}"#).unwrap();
        assert!(request.context.is_none());
        assert!(request.nodes.is_empty());
    }
}
