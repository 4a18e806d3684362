//! Shared HTTP client and error mapping.

use std::sync::OnceLock;
use std::time::Duration;

use crate::error::AgentError;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Header carrying the Gemini API key.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client with the default timeout.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        build_client(DEFAULT_TIMEOUT).unwrap_or_else(|_| reqwest::Client::new())
    })
}

/// Build a client with a custom timeout.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, AgentError> {
    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(10)
        .build()?)
}

/// Map a non-success HTTP status to an error.
pub fn status_to_error(status: u16, body: &str) -> AgentError {
    let message = extract_error_message(body).unwrap_or_else(|| body.to_string());
    match status {
        401 | 403 => AgentError::Authentication(message),
        _ => AgentError::remote(status, message),
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    // {"error": {"code": 400, "message": "...", "status": "INVALID_ARGUMENT"}}
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
}
