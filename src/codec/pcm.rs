//! Raw PCM sample decoding.

use crate::error::SpeechError;

/// Decoded audio: per-channel float samples plus rate metadata.
///
/// All channels have equal length. Samples are nominally in [-1.0, 1.0];
/// the WAV encoder clamps rather than trusting that range.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    pub sample_rate: u32,
    pub channels: Vec<Vec<f32>>,
}

impl AudioBuffer {
    pub fn num_channels(&self) -> u16 {
        self.channels.len() as u16
    }

    /// Frames per channel.
    pub fn num_frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames() as f64 / self.sample_rate as f64
    }
}

/// Reusable decoder for headerless interleaved 16-bit little-endian PCM.
///
/// The wire payload carries no format header, so the sample rate and channel
/// count must be supplied up front. Create one per stream format and reuse it
/// across requests.
#[derive(Debug, Clone)]
pub struct PcmDecoder {
    sample_rate: u32,
    num_channels: u16,
}

impl PcmDecoder {
    pub fn new(sample_rate: u32, num_channels: u16) -> Self {
        Self {
            sample_rate,
            num_channels,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn num_channels(&self) -> u16 {
        self.num_channels
    }

    /// Decode raw bytes into per-channel float samples, normalized by 32768
    /// so that i16::MIN maps to exactly -1.0.
    ///
    /// The byte count must be a whole number of frames; a trailing partial
    /// sample is an error, never a silent truncation. Empty input produces
    /// an empty buffer.
    pub fn decode(&self, bytes: &[u8]) -> Result<AudioBuffer, SpeechError> {
        let frame_size = self.num_channels as usize * 2;
        if frame_size == 0 {
            return Err(SpeechError::MalformedInput(
                "PCM decoder configured with zero channels".to_string(),
            ));
        }
        if bytes.len() % frame_size != 0 {
            return Err(SpeechError::MalformedInput(format!(
                "PCM payload length {} is not a multiple of the {}-byte frame size",
                bytes.len(),
                frame_size
            )));
        }

        let num_frames = bytes.len() / frame_size;
        let mut channels: Vec<Vec<f32>> = (0..self.num_channels)
            .map(|_| Vec::with_capacity(num_frames))
            .collect();

        for (i, sample_bytes) in bytes.chunks_exact(2).enumerate() {
            let sample = i16::from_le_bytes([sample_bytes[0], sample_bytes[1]]);
            channels[i % self.num_channels as usize].push(sample as f32 / 32768.0);
        }

        Ok(AudioBuffer {
            sample_rate: self.sample_rate,
            channels,
        })
    }
}
