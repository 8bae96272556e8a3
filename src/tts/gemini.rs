//! Gemini speech API provider (`models/<model>:generateContent`).

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::http::{shared_client, status_to_error};
use super::provider::SpeechProvider;
use super::types::SpeechRequest;
use crate::codec;
use crate::error::SpeechError;
use crate::util::retry::RetryPolicy;
use crate::util::timeout::with_timeout;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-tts";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default cap on request text length, in characters.
pub const DEFAULT_MAX_TEXT_LEN: usize = 1000;

/// Wire format of the returned audio payload: headerless 16-bit
/// little-endian PCM, mono, 24 kHz.
pub const PCM_SAMPLE_RATE: u32 = 24_000;
pub const PCM_CHANNELS: u16 = 1;

/// Gemini TTS provider.
///
/// Sends text with a speech config and returns the decoded PCM payload from
/// the response's inline data part.
#[derive(Debug, Clone)]
pub struct GeminiTtsProvider {
    api_key: String,
    base_url: String,
    model: String,
    max_text_len: usize,
    timeout: Duration,
    retry_policy: RetryPolicy,
}

impl GeminiTtsProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_text_len: DEFAULT_MAX_TEXT_LEN,
            timeout: DEFAULT_TIMEOUT,
            retry_policy: RetryPolicy::default(),
        }
    }

    pub fn new_with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
            max_text_len: DEFAULT_MAX_TEXT_LEN,
            timeout: DEFAULT_TIMEOUT,
            retry_policy: RetryPolicy::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_text_len(mut self, max_text_len: usize) -> Self {
        self.max_text_len = max_text_len;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    fn validate_request(&self, request: &SpeechRequest) -> Result<(), SpeechError> {
        if self.api_key.trim().is_empty() {
            return Err(SpeechError::Authentication(
                "Missing Gemini API key for speech generation".to_string(),
            ));
        }
        if request.text.trim().is_empty() {
            return Err(SpeechError::InvalidArgument(
                "Speech text cannot be empty".to_string(),
            ));
        }
        let text_len = request.text.chars().count();
        if text_len > self.max_text_len {
            return Err(SpeechError::InvalidArgument(format!(
                "Speech text is {text_len} characters; the limit is {}",
                self.max_text_len
            )));
        }
        if request.voice.as_str().trim().is_empty() {
            return Err(SpeechError::InvalidArgument(
                "Voice name cannot be empty".to_string(),
            ));
        }
        if let Some(pitch) = request.pitch {
            if !pitch.is_finite() || !(-20.0..=20.0).contains(&pitch) {
                return Err(SpeechError::InvalidArgument(
                    "Pitch must be between -20.0 and 20.0".to_string(),
                ));
            }
        }
        if let Some(rate) = request.speaking_rate {
            if !rate.is_finite() || !(0.25..=4.0).contains(&rate) {
                return Err(SpeechError::InvalidArgument(
                    "Speaking rate must be between 0.25 and 4.0".to_string(),
                ));
            }
        }
        Ok(())
    }

    fn build_request_body(&self, request: &SpeechRequest) -> serde_json::Value {
        let mut speech_config = serde_json::Map::new();
        speech_config.insert(
            "voiceConfig".into(),
            serde_json::json!({
                "prebuiltVoiceConfig": { "voiceName": request.voice.as_str() }
            }),
        );
        // The API may reject requests that explicitly set default values, so
        // pitch and speakingRate are attached only when non-default.
        if let Some(pitch) = request.non_default_pitch() {
            speech_config.insert("pitch".into(), pitch.into());
        }
        if let Some(rate) = request.non_default_speaking_rate() {
            speech_config.insert("speakingRate".into(), rate.into());
        }

        serde_json::json!({
            "contents": [{ "parts": [{ "text": request.text }] }],
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": speech_config,
            },
        })
    }

    async fn generate_speech_once(&self, request: &SpeechRequest) -> Result<Vec<u8>, SpeechError> {
        let body = self.build_request_body(request);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            trim_trailing_slash(&self.base_url),
            self.model,
            self.api_key
        );

        debug!(model = %self.model, voice = request.voice.as_str(), "Gemini generate_speech");

        with_timeout(self.timeout, async {
            let response = shared_client().post(&url).json(&body).send().await?;

            let status = response.status().as_u16();
            if status != 200 {
                let body_text = response.text().await.unwrap_or_default();
                return Err(status_to_error(status, &body_text));
            }

            let body_text = response.text().await?;
            let parsed: GeminiSpeechResponse = serde_json::from_str(&body_text)?;
            let payload = parsed
                .into_audio_payload()
                .ok_or(SpeechError::EmptyResponse)?;

            codec::base64::decode(&payload)
        })
        .await
    }
}

#[async_trait]
impl SpeechProvider for GeminiTtsProvider {
    async fn generate_speech(&self, request: &SpeechRequest) -> Result<Vec<u8>, SpeechError> {
        self.validate_request(request)?;
        self.retry_policy
            .execute(|| self.generate_speech_once(request))
            .await
    }

    fn sample_rate(&self) -> u32 {
        PCM_SAMPLE_RATE
    }

    fn num_channels(&self) -> u16 {
        PCM_CHANNELS
    }
}

fn trim_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

// Internal Gemini response types

#[derive(Deserialize)]
struct GeminiSpeechResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPart {
    inline_data: Option<GeminiInlineData>,
}

#[derive(Deserialize)]
struct GeminiInlineData {
    data: Option<String>,
}

impl GeminiSpeechResponse {
    /// First non-empty inline data payload of the first candidate, if any.
    fn into_audio_payload(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .find_map(|part| part.inline_data?.data)
            .filter(|data| !data.is_empty())
    }
}
