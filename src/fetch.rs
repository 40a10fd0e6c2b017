use std::time::Duration;

use reqwest::header::HeaderName;
use tokio::time::sleep;

use crate::{ClientOptions, FedFinError, Query, Result};

/// Issues a GET request and decodes the JSON body, retrying failed attempts
/// with linearly increasing backoff.
///
/// An attempt fails on a transport error, any non-success status, or a
/// success status whose body does not parse as JSON. Every failed attempt is
/// logged at warn level before the retry-or-propagate decision; the error of
/// the final attempt is propagated unchanged.
pub(crate) async fn fetch_json(
    http: &reqwest::Client,
    url: &str,
    query: &Query,
    headers: &[(HeaderName, String)],
    options: &ClientOptions,
) -> Result<serde_json::Value> {
    let max_attempts = options.max_retries.max(1);
    let mut attempt = 1u32;
    loop {
        match attempt_get(http, url, query, headers, options.timeout_ms).await {
            Ok(body) => return Ok(body),
            Err(err) => {
                tracing::warn!(
                    "request to {url} failed on attempt {attempt}/{max_attempts}: {err}"
                );
                if attempt >= max_attempts {
                    return Err(err);
                }
                let wait_ms = options.retry_backoff_ms.saturating_mul(u64::from(attempt));
                sleep(Duration::from_millis(wait_ms)).await;
                attempt += 1;
            }
        }
    }
}

async fn attempt_get(
    http: &reqwest::Client,
    url: &str,
    query: &Query,
    headers: &[(HeaderName, String)],
    timeout_ms: u64,
) -> Result<serde_json::Value> {
    let mut request = http.get(url).timeout(Duration::from_millis(timeout_ms));
    for (name, value) in headers {
        request = request.header(name, value.as_str());
    }
    if !query.is_empty() {
        request = request.query(query.pairs());
    }

    let response = request.send().await.map_err(FedFinError::Transport)?;

    let status = response.status();
    let body = response.text().await.map_err(FedFinError::Transport)?;

    if !status.is_success() {
        return Err(FedFinError::Http {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body)
        .map_err(|err| FedFinError::Decode(format!("invalid JSON response: {err}")))
}
