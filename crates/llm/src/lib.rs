//! Outline generation.
//!
//! Builds the fixed slide-outline prompt and sends it to an OpenAI-style
//! chat completions API, returning the model's raw text response.

pub mod client;
pub mod prompt;

pub use client::{ChatClient, DEFAULT_MODEL};
pub use prompt::outline_prompt;
