// Interview engine: question generation, answer analysis, feedback
// extraction and session scoring.
// All text generation goes through llm_client::TextGenerator.

pub mod aggregate;
pub mod analyzer;
pub mod feedback;
pub mod handlers;
pub mod prompts;
pub mod questions;
pub mod store;
