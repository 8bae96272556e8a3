//! SpeakWithMe: text-to-speech client for the Gemini speech API.
//!
//! Sends text to the hosted speech endpoint, decodes the returned base64 PCM
//! payload, and wraps it as a playable WAV file held in memory or written to
//! disk.
//!
//! # Quick Start
//!
//! ```no_run
//! use speakwithme::prelude::*;
//!
//! # async fn example() -> speakwithme::error::Result<()> {
//! let mut synth = SpeechConfig::from_env().build_synthesizer()?;
//! let request = SpeechRequest::builder()
//!     .text("Hello!".to_string())
//!     .voice(Voice::Kore)
//!     .build();
//! let audio = synth.synthesize(&request).await?;
//! audio.write_to("hello.wav")?;
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod prelude;
pub mod session;
pub mod tts;
pub mod util;
pub mod voices;

#[cfg(feature = "cli")]
pub mod cli;
