//! Soundgraph is a Rust library for turning musical composition graphs into
//! generative audio. It covers the pure transformations (graph-to-prompt
//! construction, instruction templates, model-output extraction) and thin
//! clients for the external text, music, speech, and transcription services.

pub mod command;
pub mod extract;
pub mod graph;
pub mod prompt;
pub mod providers;
pub mod recommendation;

pub use command::GraphCommand;
pub use extract::ExtractionError;
pub use graph::{Edge, Graph, Node, NodeKind, Position, Relation};
pub use providers::{GenerateOptions, ProviderError};
pub use recommendation::InstrumentRecommendation;
