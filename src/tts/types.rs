//! Speech request types.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::voices::Voice;

/// Pitch applied by the API when the field is omitted.
pub const DEFAULT_PITCH: f64 = 0.0;
/// Speaking rate applied by the API when the field is omitted.
pub const DEFAULT_SPEAKING_RATE: f64 = 1.0;

/// A single speech synthesis request.
///
/// `pitch` and `speaking_rate` left as `None` defer to the API defaults.
/// Explicitly-set default values are still omitted from the wire body, since
/// the API may reject requests that spell them out.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
pub struct SpeechRequest {
    /// Text to synthesize.
    pub text: String,
    /// Voice to speak with.
    pub voice: Voice,
    /// Semitone offset from the voice's natural pitch.
    pub pitch: Option<f64>,
    /// Speaking rate multiplier.
    pub speaking_rate: Option<f64>,
}

impl SpeechRequest {
    /// Pitch, unless it matches the API default.
    pub fn non_default_pitch(&self) -> Option<f64> {
        self.pitch.filter(|p| *p != DEFAULT_PITCH)
    }

    /// Speaking rate, unless it matches the API default.
    pub fn non_default_speaking_rate(&self) -> Option<f64> {
        self.speaking_rate.filter(|r| *r != DEFAULT_SPEAKING_RATE)
    }
}
