//! Audio codecs: base64 payload decoding, raw PCM decoding, WAV encoding.

pub mod base64;
pub mod pcm;
pub mod wav;

pub use pcm::{AudioBuffer, PcmDecoder};
