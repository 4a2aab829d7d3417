//! HTTP client wrapper - document fetch and endpoint invocation

use std::time::Instant;

use anyhow::Result;
use serde_json::Value;

use crate::constants::{API_KEY_HEADER, DOCS_LOAD_ERROR};
use crate::docs;
use crate::messages::NetworkResponse;
use crate::models::EndpointDescriptor;

/// Create the shared HTTP client.
///
/// No explicit timeout: an invocation waits as long as the transport does.
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Fetch the OpenAPI document and flatten it into endpoint descriptors.
///
/// Transport errors, non-2xx statuses, and parse errors all collapse into
/// the same user-facing message; the specific cause only reaches the log.
pub async fn fetch_document(
    client: &reqwest::Client,
    url: &str,
    request_id: u64,
) -> NetworkResponse {
    match try_fetch_document(client, url).await {
        Ok(endpoints) => {
            tracing::info!(id = request_id, count = endpoints.len(), "Document loaded");
            NetworkResponse::DocumentLoaded {
                id: request_id,
                endpoints,
            }
        }
        Err(e) => {
            tracing::warn!(id = request_id, error = %e, "Document load failed");
            NetworkResponse::DocumentFailed {
                id: request_id,
                message: String::from(DOCS_LOAD_ERROR),
            }
        }
    }
}

async fn try_fetch_document(client: &reqwest::Client, url: &str) -> Result<Vec<EndpointDescriptor>> {
    let response = client.get(url).send().await?.error_for_status()?;
    let doc: Value = response.json().await?;
    Ok(docs::parse_endpoints(&doc))
}

/// Execute one endpoint invocation and classify the outcome.
///
/// A received response is always `Completed`, whatever its status code -
/// the explorer shows 4xx/5xx bodies as results, never as failures. Only
/// a transport-level error (or an unreadable body) becomes `Failed`.
pub async fn execute_invocation(
    client: &reqwest::Client,
    method: &str,
    base_url: &str,
    path: &str,
    api_key: &str,
    request_id: u64,
) -> NetworkResponse {
    let url = join_url(base_url, path);

    let method = match reqwest::Method::from_bytes(method.to_uppercase().as_bytes()) {
        Ok(m) => m,
        Err(_) => {
            return NetworkResponse::Failed {
                id: request_id,
                status: None,
                body: message_body(&format!("invalid HTTP method: {}", method)),
                time_ms: 0,
            }
        }
    };

    let start = Instant::now();
    let result = client
        .request(method, &url)
        .header(API_KEY_HEADER, api_key)
        .send()
        .await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(resp) => {
            let status = resp.status().as_u16();
            match resp.text().await {
                Ok(body) => NetworkResponse::Completed {
                    id: request_id,
                    status,
                    body,
                    time_ms: elapsed,
                },
                Err(e) => NetworkResponse::Failed {
                    id: request_id,
                    status: Some(status),
                    body: message_body(&format!("error reading body: {}", e)),
                    time_ms: elapsed,
                },
            }
        }
        Err(e) => NetworkResponse::Failed {
            id: request_id,
            // Present only when a response arrived before the failure
            status: e.status().map(|s| s.as_u16()),
            body: message_body(&transport_message(&e)),
            time_ms: elapsed,
        },
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Synthesized body shown when there is no real response body
fn message_body(message: &str) -> String {
    serde_json::json!({ "message": message }).to_string()
}

fn transport_message(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("Request timed out: {}", e)
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        format!("Request failed: {}", e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_avoids_doubled_slashes() {
        assert_eq!(
            join_url("https://api.test/v1/", "/users/7"),
            "https://api.test/v1/users/7"
        );
        assert_eq!(
            join_url("https://api.test/v1", "/users/7"),
            "https://api.test/v1/users/7"
        );
    }

    #[test]
    fn synthesized_body_is_a_message_object() {
        let body = message_body("Connection failed: refused");
        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["message"], "Connection failed: refused");
    }
}
