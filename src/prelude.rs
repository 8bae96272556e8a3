//! Convenience re-exports for common use.

pub use crate::codec::{AudioBuffer, PcmDecoder};
pub use crate::config::SpeechConfig;
pub use crate::error::{Result, SpeechError};
pub use crate::session::{Synthesizer, WavAudio};
pub use crate::tts::{GeminiTtsProvider, SpeechProvider, SpeechRequest};
pub use crate::voices::Voice;
