//! Graph editing endpoint: POST /graph/update

use crate::error::{ApiError, Result};
use crate::state::AppState;
use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use soundgraph::prompt::edit_prompt;
use soundgraph::providers::GenerateOptions;
use soundgraph::{Graph, GraphCommand, extract};
use tracing::info;

// Low temperature: command generation should be deterministic, not creative.
const EDIT_OPTIONS: GenerateOptions = GenerateOptions::new()
    .with_temperature(0.1)
    .with_top_p(0.95)
    .with_max_output_tokens(2048);

/// Request payload: the current graph plus a natural-language instruction.
#[derive(Debug, Deserialize)]
pub struct GraphUpdateRequest {
    /// Graph state as the client currently holds it.
    current_graph: Graph,
    /// What the user wants changed.
    instruction: String,
}

/// Response payload: ordered edit commands for the client to apply.
#[derive(Debug, Serialize)]
pub struct GraphCommandsResponse {
    /// Commands, in application order.
    commands: Vec<GraphCommand>,
}

/// POST /graph/update - translate an instruction into graph commands.
pub async fn update_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphUpdateRequest>,
) -> Result<Json<GraphCommandsResponse>> {
    if request.instruction.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "instruction must not be empty".to_string(),
        ));
    }

    let prompt = edit_prompt(&request.current_graph, &request.instruction);
    let text = state.completion.generate(&prompt, &EDIT_OPTIONS).await?;
    let commands: Vec<GraphCommand> = extract::extract_field(&text, "commands")?;

    info!(count = commands.len(), "generated graph commands");
    Ok(Json(GraphCommandsResponse { commands }))
}
