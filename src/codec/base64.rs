//! Base64 audio payload decoding.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, Engine, GeneralPurpose, GeneralPurposeConfig};

use crate::error::SpeechError;

// API payloads arrive padded, but padding is not required of callers.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a standard-alphabet base64 payload into raw bytes.
///
/// Fails with [`SpeechError::MalformedInput`] on an empty payload or any
/// character outside the alphabet; never produces partial output.
pub fn decode(payload: &str) -> Result<Vec<u8>, SpeechError> {
    if payload.is_empty() {
        return Err(SpeechError::MalformedInput(
            "empty base64 payload".to_string(),
        ));
    }
    PAYLOAD_ENGINE
        .decode(payload)
        .map_err(|e| SpeechError::MalformedInput(format!("invalid base64 payload: {e}")))
}
