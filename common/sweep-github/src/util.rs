//! Response handling shared by the endpoint modules

use anyhow::{Result, anyhow};
use reqwest::Response;
use serde_json::Value;

/// Pass successful responses through, turn everything else into an error
///
/// GitHub error bodies carry a `message` field; when present it is used in
/// place of the raw body so the user sees "Not Found" rather than a JSON blob.
pub(crate) async fn ensure_success(response: Response, action: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    Err(anyhow!(
        "Failed to {} ({} {}): {}",
        action,
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown"),
        error_message(&error_text)
    ))
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
