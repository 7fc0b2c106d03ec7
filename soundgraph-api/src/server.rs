//! Server setup with tower middleware.

use crate::routes;
use crate::state::AppState;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Build the application router with middleware.
#[must_use]
pub fn create_app(state: AppState) -> Router {
    routes::create_router()
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Serve the application until the listener fails or shutdown.
///
/// # Errors
///
/// Returns an IO error when binding or serving fails.
pub async fn run_server(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("soundgraph API listening on {addr}");
    axum::serve(listener, create_app(state)).await
}
