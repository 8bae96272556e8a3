//! SpeakWithMe CLI binary entry point.

use clap::Parser;
use speakwithme::cli::{Cli, Commands, SayArgs};
use speakwithme::config::SpeechConfig;
use speakwithme::error::SpeechError;
use speakwithme::tts::SpeechRequest;
use speakwithme::voices::Voice;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Say(args) => handle_say(args).await,
        Commands::Voices => {
            for voice in Voice::prebuilt() {
                println!("{}", voice.as_str());
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
}

async fn handle_say(args: SayArgs) -> Result<(), SpeechError> {
    let text = match args.text {
        Some(t) => t,
        None => {
            eprintln!("Usage: speakwithme say \"your text here\"");
            std::process::exit(1);
        }
    };

    // Any unrecognized name falls through to a custom voice.
    let voice: Voice = args
        .voice
        .parse()
        .unwrap_or(Voice::Custom(args.voice.clone()));

    let request = SpeechRequest::builder()
        .text(text)
        .voice(voice)
        .maybe_pitch(args.pitch)
        .maybe_speaking_rate(args.speed)
        .build();

    let mut synth = SpeechConfig::from_env().build_synthesizer()?;
    let audio = synth.synthesize(&request).await?;
    audio.write_to(&args.out)?;

    println!(
        "Wrote {:.2}s of audio ({} bytes) to {}",
        audio.duration_secs(),
        audio.bytes().len(),
        args.out.display()
    );
    Ok(())
}
