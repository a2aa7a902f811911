use crate::domain::shared::errors::DomainError;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::time::Duration;

/// Build the HTTP client shared by every upstream adapter.
///
/// The timeout covers the whole exchange, so a slow body read fails the same
/// way a refused connection does.
pub fn build_http_client(timeout: Duration, user_agent: &str) -> anyhow::Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Map a failed send (connect, timeout, redirect loop...) to `UpstreamUnavailable`.
pub(crate) fn transport_error(service: &str, err: reqwest::Error) -> DomainError {
    if err.is_timeout() {
        tracing::warn!(service, reqwest_timeout = %err, "upstream call timed out");
    } else if err.is_connect() {
        tracing::warn!(service, reqwest_connect = %err, "upstream connection failed");
    } else {
        tracing::error!(service, reqwest_error = %err, "upstream request failed");
    }
    DomainError::UpstreamUnavailable(format!("{service}: {err}"))
}

/// Map a failed body read. Undecodable JSON is reported through `on_decode`,
/// anything else (timeouts mid-body) is a transport failure.
pub(crate) fn body_error(
    service: &str,
    err: reqwest::Error,
    on_decode: fn(String) -> DomainError,
) -> DomainError {
    if err.is_decode() {
        tracing::warn!(service, decode_error = %err, "upstream body could not be decoded");
        on_decode(format!("{service}: {err}"))
    } else {
        transport_error(service, err)
    }
}

/// Issue a GET and report the status code, or `503` if nothing answered.
pub(crate) async fn probe_status(client: &reqwest::Client, service: &str, url: &str) -> u16 {
    tracing::debug!(service, url, "probing upstream");
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            tracing::debug!(service, status, "upstream probe answered");
            status
        }
        Err(err) => {
            tracing::warn!(service, error = %err, "upstream probe failed");
            http::StatusCode::SERVICE_UNAVAILABLE.as_u16()
        }
    }
}
