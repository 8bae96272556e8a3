//! Text-to-speech: request types, the provider trait, and the Gemini implementation.

pub mod gemini;
mod http;
pub mod provider;
pub mod types;

pub use gemini::GeminiTtsProvider;
pub use provider::SpeechProvider;
pub use types::*;
