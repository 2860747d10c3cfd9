//! Shared HTTP client and status-code mapping.

use std::sync::OnceLock;

use crate::error::PalaverError;

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

/// Map a non-success HTTP status to the matching error variant.
pub fn status_to_error(status: u16, body: &str) -> PalaverError {
    match status {
        401 | 403 => PalaverError::Authentication(body.to_string()),
        429 => PalaverError::RateLimited {
            retry_after_ms: extract_retry_after(body),
        },
        _ => PalaverError::api(status, body),
    }
}

/// Pull the suggested delay out of a Gemini 429 body. Those bodies carry a
/// RetryInfo detail whose `retryDelay` is a string like `"33s"`.
fn extract_retry_after(body: &str) -> Option<u64> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let details = value.get("error")?.get("details")?.as_array()?;
    details.iter().find_map(|detail| {
        let delay = detail.get("retryDelay")?.as_str()?;
        let seconds: f64 = delay.strip_suffix('s')?.parse().ok()?;
        Some((seconds * 1000.0) as u64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_authentication() {
        let err = status_to_error(401, "bad key");
        assert!(matches!(err, PalaverError::Authentication(_)));
    }

    #[test]
    fn rate_limit_carries_retry_delay() {
        let body = r#"{
            "error": {
                "code": 429,
                "status": "RESOURCE_EXHAUSTED",
                "details": [
                    {"@type": "type.googleapis.com/google.rpc.RetryInfo", "retryDelay": "12s"}
                ]
            }
        }"#;
        match status_to_error(429, body) {
            PalaverError::RateLimited { retry_after_ms } => {
                assert_eq!(retry_after_ms, Some(12_000));
            }
            other => panic!("expected RateLimited, got {other:?}"),
        }
    }

    #[test]
    fn rate_limit_without_details_has_no_delay() {
        match status_to_error(429, "slow down") {
            PalaverError::RateLimited { retry_after_ms } => {
                assert_eq!(retry_after_ms, None);
            }
            other => panic!("expected RateLimited, got {other:?}"),
        }
    }

    #[test]
    fn other_statuses_map_to_api_error() {
        match status_to_error(500, "boom") {
            PalaverError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }
}
