//! Generation domain
//!
//! Request shapes for the text-generation capability.

pub mod entities;

pub use entities::{GenerationRequest, GenerationSettings, Message, Role};
