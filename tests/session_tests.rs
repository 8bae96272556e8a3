//! End-to-end session tests: provider call through WAV handle.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::json;
use speakwithme::config::SpeechConfig;
use speakwithme::error::SpeechError;
use speakwithme::session::Synthesizer;
use speakwithme::tts::{SpeechProvider, SpeechRequest};
use speakwithme::voices::Voice;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn speech_request(text: &str) -> SpeechRequest {
    SpeechRequest::builder()
        .text(text.to_string())
        .voice(Voice::Zephyr)
        .build()
}

fn pcm_bytes(samples: &[i16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    bytes
}

fn audio_response(samples: &[i16]) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": {
                "parts": [{
                    "inlineData": { "data": STANDARD.encode(pcm_bytes(samples)) }
                }]
            }
        }]
    }))
}

fn test_synthesizer(server: &MockServer) -> Synthesizer {
    SpeechConfig::new()
        .with_api_key("test-key")
        .with_base_url(server.uri())
        .build_synthesizer()
        .expect("config with key builds")
}

#[tokio::test]
async fn synthesize_produces_a_playable_wav() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(audio_response(&[0, 1000, -1000]))
        .expect(1)
        .mount(&server)
        .await;

    let mut synth = test_synthesizer(&server);
    let audio = synth
        .synthesize(&speech_request("hello"))
        .await
        .expect("synthesis should succeed");

    assert_eq!(audio.sample_rate(), 24_000);
    assert_eq!(audio.num_channels(), 1);
    assert_eq!(audio.num_frames(), 3);
    assert!((audio.duration_secs() - 3.0 / 24_000.0).abs() < 1e-9);

    let bytes = audio.bytes();
    assert_eq!(bytes.len(), 44 + 6);
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(u32::from_le_bytes(bytes[4..8].try_into().unwrap()), 42);
    assert_eq!(u32::from_le_bytes(bytes[24..28].try_into().unwrap()), 24_000);
    assert_eq!(u32::from_le_bytes(bytes[40..44].try_into().unwrap()), 6);
    // Raw PCM carried through untouched.
    assert_eq!(&bytes[44..], &pcm_bytes(&[0, 1000, -1000])[..]);
}

#[tokio::test]
async fn a_new_synthesis_replaces_the_previous_handle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(audio_response(&[1, 2, 3, 4]))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let mut synth = test_synthesizer(&server);
    synth
        .synthesize(&speech_request("first"))
        .await
        .expect("first synthesis should succeed");
    let first = synth.current().expect("handle present").clone();

    Mock::given(method("POST"))
        .respond_with(audio_response(&[5, 6]))
        .mount(&server)
        .await;

    synth
        .synthesize(&speech_request("second"))
        .await
        .expect("second synthesis should succeed");
    let second = synth.current().expect("handle present");

    assert_eq!(first.num_frames(), 4);
    assert_eq!(second.num_frames(), 2);
    assert_ne!(first.bytes(), second.bytes());
}

#[tokio::test]
async fn a_failed_synthesis_keeps_the_previous_handle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(audio_response(&[7, 8, 9]))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let mut synth = test_synthesizer(&server);
    synth
        .synthesize(&speech_request("works"))
        .await
        .expect("first synthesis should succeed");

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let err = synth
        .synthesize(&speech_request("fails"))
        .await
        .expect_err("empty response should fail");

    assert!(matches!(err, SpeechError::EmptyResponse));
    assert!(err.user_message().contains("no audio"));
    assert_eq!(synth.current().expect("old handle kept").num_frames(), 3);
}

#[tokio::test]
async fn take_current_empties_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(audio_response(&[1]))
        .mount(&server)
        .await;

    let mut synth = test_synthesizer(&server);
    synth
        .synthesize(&speech_request("hi"))
        .await
        .expect("synthesis should succeed");

    let owned = synth.take_current().expect("handle present");
    assert_eq!(owned.num_frames(), 1);
    assert!(synth.current().is_none());
}

#[tokio::test]
async fn wav_handle_writes_to_disk() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(audio_response(&[0, 16_000]))
        .mount(&server)
        .await;

    let mut synth = test_synthesizer(&server);
    let audio = synth
        .synthesize(&speech_request("to disk"))
        .await
        .expect("synthesis should succeed");

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("speech.wav");
    audio.write_to(&path).expect("write should succeed");

    let written = std::fs::read(&path).expect("file readable");
    assert_eq!(written, audio.bytes());
}

// Offline stub: exercises the session pipeline without a server.
struct FixedPcmProvider {
    samples: Vec<i16>,
}

#[async_trait]
impl SpeechProvider for FixedPcmProvider {
    async fn generate_speech(&self, _request: &SpeechRequest) -> Result<Vec<u8>, SpeechError> {
        Ok(pcm_bytes(&self.samples))
    }

    fn sample_rate(&self) -> u32 {
        24_000
    }

    fn num_channels(&self) -> u16 {
        1
    }
}

#[tokio::test]
async fn session_reuses_one_decoder_across_requests() {
    let provider = FixedPcmProvider {
        samples: vec![100, -100],
    };
    let mut synth = Synthesizer::new(Box::new(provider));

    for _ in 0..3 {
        let audio = synth
            .synthesize(&speech_request("again"))
            .await
            .expect("stub synthesis should succeed");
        assert_eq!(audio.num_frames(), 2);
        assert_eq!(audio.sample_rate(), 24_000);
    }
}

#[tokio::test]
async fn zero_length_payload_yields_header_only_wav() {
    let provider = FixedPcmProvider { samples: vec![] };
    let mut synth = Synthesizer::new(Box::new(provider));

    let audio = synth
        .synthesize(&speech_request("silence"))
        .await
        .expect("empty PCM is a valid stream");

    assert_eq!(audio.bytes().len(), 44);
    assert_eq!(audio.num_frames(), 0);
    assert_eq!(audio.duration_secs(), 0.0);
}
