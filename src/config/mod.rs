//! Configuration (explicit values > environment > .env file).

use std::env;

use crate::error::SpeechError;
use crate::session::Synthesizer;
use crate::tts::gemini::{GeminiTtsProvider, DEFAULT_MAX_TEXT_LEN};

/// Environment-backed configuration for the speech client.
#[derive(Debug, Clone, Default)]
pub struct SpeechConfig {
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
    max_text_len: Option<usize>,
}

impl SpeechConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from environment variables: `GEMINI_API_KEY` (or
    /// `GOOGLE_API_KEY`), `SPEAKWITHME_BASE_URL`, `SPEAKWITHME_MODEL`, and
    /// `SPEAKWITHME_MAX_TEXT_LEN`.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::new();

        for var in ["GEMINI_API_KEY", "GOOGLE_API_KEY"] {
            if let Ok(key) = env::var(var) {
                config.api_key = Some(key);
                break;
            }
        }
        if let Ok(url) = env::var("SPEAKWITHME_BASE_URL") {
            config.base_url = Some(url);
        }
        if let Ok(model) = env::var("SPEAKWITHME_MODEL") {
            config.model = Some(model);
        }
        if let Ok(raw) = env::var("SPEAKWITHME_MAX_TEXT_LEN") {
            match raw.parse() {
                Ok(len) => config.max_text_len = Some(len),
                Err(_) => {
                    tracing::warn!(value = %raw, "Ignoring invalid SPEAKWITHME_MAX_TEXT_LEN")
                }
            }
        }

        config
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_max_text_len(mut self, max_text_len: usize) -> Self {
        self.max_text_len = Some(max_text_len);
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn max_text_len(&self) -> usize {
        self.max_text_len.unwrap_or(DEFAULT_MAX_TEXT_LEN)
    }

    /// Build a Gemini provider from this config.
    pub fn build_provider(&self) -> Result<GeminiTtsProvider, SpeechError> {
        let api_key = self.api_key.clone().ok_or_else(|| {
            SpeechError::Configuration(
                "No API key configured; set GEMINI_API_KEY or GOOGLE_API_KEY".to_string(),
            )
        })?;

        let mut provider = match &self.base_url {
            Some(url) => GeminiTtsProvider::new_with_base_url(api_key, url.clone()),
            None => GeminiTtsProvider::new(api_key),
        };
        if let Some(model) = &self.model {
            provider = provider.with_model(model.clone());
        }
        Ok(provider.with_max_text_len(self.max_text_len()))
    }

    /// Build a ready-to-use synthesizer session.
    pub fn build_synthesizer(&self) -> Result<Synthesizer, SpeechError> {
        Ok(Synthesizer::new(Box::new(self.build_provider()?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_methods_set_fields() {
        let config = SpeechConfig::new()
            .with_api_key("key")
            .with_base_url("http://localhost:1234")
            .with_model("speech-model")
            .with_max_text_len(500);

        assert_eq!(config.api_key(), Some("key"));
        assert_eq!(config.max_text_len(), 500);
        assert!(config.build_provider().is_ok());
    }

    #[test]
    fn max_text_len_defaults() {
        assert_eq!(SpeechConfig::new().max_text_len(), DEFAULT_MAX_TEXT_LEN);
    }

    #[test]
    fn build_provider_requires_api_key() {
        let err = SpeechConfig::new().build_provider().unwrap_err();
        assert!(matches!(err, SpeechError::Configuration(_)));
        assert!(err.user_message().contains("GEMINI_API_KEY"));
    }
}
