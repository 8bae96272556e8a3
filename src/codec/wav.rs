//! WAV container encoding.

use super::pcm::AudioBuffer;

const HEADER_LEN: usize = 44;
const BITS_PER_SAMPLE: u16 = 16;

/// Serialize a sample buffer as a complete RIFF/WAVE file.
///
/// Canonical 44-byte header, PCM format tag, interleaved 16-bit
/// little-endian data. Channel count and sample rate are carried through
/// from the buffer unvalidated. A zero-length buffer yields a header-only
/// file with a zero data size.
pub fn encode(buffer: &AudioBuffer) -> Vec<u8> {
    let num_channels = buffer.num_channels();
    let num_frames = buffer.num_frames();
    let sample_rate = buffer.sample_rate;

    let block_align = num_channels * 2;
    let byte_rate = sample_rate * u32::from(block_align);
    let data_size = (num_frames * num_channels as usize * 2) as u32;
    let file_size = 36 + data_size;

    let mut out = Vec::with_capacity(HEADER_LEN + data_size as usize);

    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&num_channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());

    for frame in 0..num_frames {
        for channel in &buffer.channels {
            out.extend_from_slice(&quantize(channel[frame]).to_le_bytes());
        }
    }

    out
}

/// Clamp to [-1.0, 1.0] and quantize to i16.
///
/// Asymmetric scale (32767 positive, 32768 negative) so both full-scale
/// inputs hit the exact integer extremes; ties round away from zero.
fn quantize(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    let scaled = if clamped < 0.0 {
        clamped * 32768.0
    } else {
        clamped * 32767.0
    };
    scaled.round() as i16
}
