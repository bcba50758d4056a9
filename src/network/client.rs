//! HTTP client wrapper - fetches the inventory snapshot and classifies failures

use std::time::{Duration, Instant};

use crate::error::FetchError;
use crate::messages::NetworkResponse;
use crate::models::ApiResponse;

/// `scheme://host:port` of the endpoint, used to tell the user where the
/// collector is expected to listen
pub fn endpoint_origin(url: &str) -> String {
    reqwest::Url::parse(url)
        .map(|u| u.origin().ascii_serialization())
        .unwrap_or_else(|_| url.to_string())
}

/// GET the latest snapshot and decode it
pub async fn fetch_latest(client: &reqwest::Client, url: &str) -> Result<ApiResponse, FetchError> {
    let resp = client.get(url).send().await.map_err(|e| {
        tracing::debug!(error = %e, timeout = e.is_timeout(), connect = e.is_connect(), "Transport error");
        FetchError::Connectivity {
            origin: endpoint_origin(url),
        }
    })?;

    let status = resp.status();
    let body = resp.text().await;

    if !status.is_success() {
        return Err(FetchError::Http {
            status: status.as_u16(),
            body: body.unwrap_or_default(),
        });
    }

    let body = body.map_err(|e| FetchError::Decode(format!("Error reading body: {}", e)))?;
    ApiResponse::from_json(&body)
}

/// Run one fetch and wrap the outcome for the App layer
pub async fn execute_fetch(client: &reqwest::Client, url: &str, request_id: u64) -> NetworkResponse {
    let start = Instant::now();
    let result = fetch_latest(client, url).await;
    let time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(data) => NetworkResponse::Loaded {
            id: request_id,
            data,
            time_ms,
        },
        Err(error) => NetworkResponse::Failed {
            id: request_id,
            error,
            time_ms,
        },
    }
}

/// Create an HTTP client with the configured timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
