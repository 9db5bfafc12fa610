//! OpenAI-compatible chat completion adapter
//!
//! Implements the [`TextGenerator`](outreach_application::TextGenerator)
//! port. Works against any server exposing `/chat/completions` with
//! bearer authentication.

mod generator;
mod types;

pub use generator::OpenAiTextGenerator;
