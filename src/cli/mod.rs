//! CLI argument definitions for SpeakWithMe.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SpeakWithMe CLI
#[derive(Parser, Debug)]
#[command(name = "speakwithme", version, about = "SpeakWithMe: text to speech, saved as WAV")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Synthesize text to a WAV file
    Say(SayArgs),
    /// List the prebuilt voices
    Voices,
}

/// Arguments for the `say` subcommand.
#[derive(Parser, Debug)]
pub struct SayArgs {
    /// Voice to speak with (prebuilt name or custom API name)
    #[arg(short, long, default_value = "Zephyr")]
    pub voice: String,

    /// Pitch offset in semitones (-20.0 to 20.0)
    #[arg(short, long)]
    pub pitch: Option<f64>,

    /// Speaking rate multiplier (0.25 to 4.0)
    #[arg(short, long)]
    pub speed: Option<f64>,

    /// Output path for the WAV file
    #[arg(short, long, default_value = "speech.wav")]
    pub out: PathBuf,

    /// Text to synthesize (positional)
    pub text: Option<String>,
}
