//! Shared HTTP client and status mapping.

use std::sync::OnceLock;

use crate::error::SpeechError;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Map a non-200 HTTP status to an error.
///
/// A 400 carrying the Google `INVALID_ARGUMENT` status becomes
/// [`SpeechError::InvalidArgument`] so callers can point the user at the
/// request settings rather than at the network.
pub fn status_to_error(status: u16, body: &str) -> SpeechError {
    match status {
        400 if google_status(body).as_deref() == Some("INVALID_ARGUMENT") => {
            SpeechError::InvalidArgument(
                google_message(body).unwrap_or_else(|| body.to_string()),
            )
        }
        401 | 403 => SpeechError::Authentication(body.to_string()),
        429 => SpeechError::RateLimited {
            retry_after_ms: None,
        },
        _ => SpeechError::api(status, body),
    }
}

// Google error envelope: {"error": {"code": .., "message": .., "status": ..}}

fn google_status(body: &str) -> Option<String> {
    error_field(body, "status")
}

fn google_message(body: &str) -> Option<String> {
    error_field(body, "message")
}

fn error_field(body: &str, field: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .get(field)?
        .as_str()
        .map(ToString::to_string)
}
