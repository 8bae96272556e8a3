//! Request orchestration: one synthesis at a time, WAV handle replacement.

use std::path::Path;

use tracing::debug;

use crate::codec::pcm::PcmDecoder;
use crate::codec::wav;
use crate::error::SpeechError;
use crate::tts::{SpeechProvider, SpeechRequest};

/// A finished synthesis: a complete WAV file held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct WavAudio {
    bytes: Vec<u8>,
    sample_rate: u32,
    num_channels: u16,
    num_frames: usize,
}

impl WavAudio {
    /// The full WAV file, header included.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn num_channels(&self) -> u16 {
        self.num_channels
    }

    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames as f64 / self.sample_rate as f64
    }

    /// Write the WAV file to disk.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), SpeechError> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}

/// Drives speech generation end to end: provider call, PCM decode, WAV
/// encode, and handle replacement.
///
/// `synthesize` takes `&mut self`, so a session admits one request at a
/// time; there is no cancellation, a request runs to completion or failure.
/// The PCM decoder is created on first use at the provider's fixed output
/// format and reused for subsequent requests.
pub struct Synthesizer {
    provider: Box<dyn SpeechProvider>,
    decoder: Option<PcmDecoder>,
    current: Option<WavAudio>,
}

impl Synthesizer {
    pub fn new(provider: Box<dyn SpeechProvider>) -> Self {
        Self {
            provider,
            decoder: None,
            current: None,
        }
    }

    /// Generate speech for `request`, replacing any previously held audio.
    ///
    /// On success the old handle is dropped and a borrow of the new one is
    /// returned. On failure the previous handle is left in place.
    pub async fn synthesize(&mut self, request: &SpeechRequest) -> Result<&WavAudio, SpeechError> {
        let pcm = self.provider.generate_speech(request).await?;

        let (sample_rate, num_channels) =
            (self.provider.sample_rate(), self.provider.num_channels());
        let decoder = self
            .decoder
            .get_or_insert_with(|| PcmDecoder::new(sample_rate, num_channels));
        let buffer = decoder.decode(&pcm)?;

        let bytes = wav::encode(&buffer);
        debug!(
            frames = buffer.num_frames(),
            bytes = bytes.len(),
            "Encoded WAV"
        );

        let audio = WavAudio {
            bytes,
            sample_rate: buffer.sample_rate,
            num_channels: buffer.num_channels(),
            num_frames: buffer.num_frames(),
        };
        Ok(self.current.insert(audio))
    }

    /// The most recent successful synthesis, if any.
    pub fn current(&self) -> Option<&WavAudio> {
        self.current.as_ref()
    }

    /// Take ownership of the most recent synthesis, leaving the session empty.
    pub fn take_current(&mut self) -> Option<WavAudio> {
        self.current.take()
    }
}
