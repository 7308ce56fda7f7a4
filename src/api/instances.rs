use serde_json::Value;
use thiserror::Error;

use crate::models::InstanceSummary;

/// Client-side fetch failures. A non-success status and a transport error
/// are deliberately not distinguished to callers.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected payload: {0}")]
    Payload(String),
}

/// Fetch the instance list from a running dashboard server.
///
/// The endpoint puts an error string under `data` on failure, so a `data`
/// that is not a list is an error even on a 200.
pub async fn fetch_instances(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<InstanceSummary>, FetchError> {
    let url = format!("{}/api/instances", base_url);
    let response = client.get(&url).send().await?.error_for_status()?;
    let envelope: Value = response.json().await?;
    let data = envelope.get("data").cloned().unwrap_or(Value::Null);
    if !data.is_array() {
        return Err(FetchError::Payload(format!("data is not a list: {}", data)));
    }
    serde_json::from_value(data).map_err(|e| FetchError::Payload(e.to_string()))
}
