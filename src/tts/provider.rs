//! Text-to-speech provider trait.

use async_trait::async_trait;

use super::types::SpeechRequest;
use crate::error::SpeechError;

/// Trait for text-to-speech providers.
///
/// Implementations return decoded raw PCM bytes; container wrapping happens
/// downstream in the session layer.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Generate raw PCM audio from text.
    async fn generate_speech(&self, request: &SpeechRequest) -> Result<Vec<u8>, SpeechError>;

    /// Sample rate of the PCM this provider returns.
    fn sample_rate(&self) -> u32;

    /// Channel count of the PCM this provider returns.
    fn num_channels(&self) -> u16;
}
