//! Error types for SpeakWithMe.

use thiserror::Error;

/// Primary error type for all speech operations.
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed audio payload: {0}")]
    MalformedInput(String),

    #[error("Speech response contained no audio payload")]
    EmptyResponse,
}

/// Broad error category for routing retry logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Network,
    Timeout,
    Server,
    Api,
    Configuration,
    Serialization,
    Decode,
    InvalidInput,
    Unknown,
}

impl SpeechError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Authentication(_) => ErrorCategory::Authentication,
            Self::RateLimited { .. } => ErrorCategory::RateLimit,
            Self::Network(_) => ErrorCategory::Network,
            Self::Timeout(_) => ErrorCategory::Timeout,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::MalformedInput(_) => ErrorCategory::Decode,
            Self::EmptyResponse => ErrorCategory::Api,
            Self::InvalidArgument(_) => ErrorCategory::InvalidInput,
            Self::Api { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                429 => ErrorCategory::RateLimit,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Api,
            },
            Self::Io(_) => ErrorCategory::Unknown,
        }
    }

    /// Whether this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::RateLimit
                | ErrorCategory::Network
                | ErrorCategory::Timeout
                | ErrorCategory::Server
        )
    }

    /// One user-facing message per failure, regardless of internal detail.
    ///
    /// Malformed payloads and empty responses are distinguished so the user
    /// knows whether the request itself succeeded; argument rejections point
    /// at the settings that caused them; everything else collapses into a
    /// generic communication failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedInput(_) => "Failed to generate audio. Please try again.".to_string(),
            Self::EmptyResponse => {
                "The request completed but returned no audio. Try different text or settings."
                    .to_string()
            }
            Self::InvalidArgument(_) => {
                "The request was rejected due to an invalid argument. \
                 Please check the voice, pitch, or speed settings."
                    .to_string()
            }
            Self::Configuration(message) => message.clone(),
            Self::Io(e) => format!("Could not write audio: {e}"),
            _ => "Failed to communicate with the speech service. Please try again.".to_string(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SpeechError>;
