//! Instrument recommendation endpoint: POST /recommendations/generate

use crate::error::Result;
use crate::state::AppState;
use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use soundgraph::prompt::recommendation_prompt;
use soundgraph::providers::GenerateOptions;
use soundgraph::{Edge, Graph, InstrumentRecommendation, Node, extract};
use tracing::info;

const RECOMMENDATION_OPTIONS: GenerateOptions = GenerateOptions::new()
    .with_temperature(0.7)
    .with_top_p(0.9)
    .with_max_output_tokens(2048);

/// Request payload for instrument recommendations.
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    /// Nodes of the composition graph.
    nodes: Vec<Node>,
    /// Edges of the composition graph.
    edges: Vec<Edge>,
}

/// Response payload: recommendations with the model's reasoning.
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    /// Recommended instruments.
    recommendations: Vec<InstrumentRecommendation>,
}

/// POST /recommendations/generate - culturally-informed instrument
/// suggestions for the current composition.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationsResponse>> {
    info!(
        nodes = request.nodes.len(),
        edges = request.edges.len(),
        "recommendation request"
    );

    let graph = Graph::new(request.nodes, request.edges);
    let prompt = recommendation_prompt(&graph);
    let text = state
        .completion
        .generate(&prompt, &RECOMMENDATION_OPTIONS)
        .await?;
    let recommendations: Vec<InstrumentRecommendation> =
        extract::extract_field(&text, "recommendations")?;

    info!(count = recommendations.len(), "generated recommendations");
    Ok(Json(RecommendationsResponse { recommendations }))
}
