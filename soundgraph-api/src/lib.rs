//! Soundgraph HTTP API.
//!
//! An axum service translating composition graphs, natural-language
//! instructions, and audio uploads into calls against the generative
//! providers, reshaping the results into JSON or streamed audio.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;
