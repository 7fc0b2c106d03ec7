//! Google Gemini text generation provider.

mod client;
mod completion;

pub use client::{GEMINI_API_BASE_URL, GeminiClient, GeminiClientBuilder};
pub use completion::CompletionModel;
