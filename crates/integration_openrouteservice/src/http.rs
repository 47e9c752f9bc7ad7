//! Shared HTTP plumbing for the openrouteservice clients

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};

use crate::config::OpenRouteServiceConfig;
use crate::error::OrsError;
use crate::models::ApiErrorBody;

/// Build a reqwest client with the configured timeout
pub(crate) fn build_client(config: &OpenRouteServiceConfig) -> Result<Client, OrsError> {
    config.validate().map_err(OrsError::ConfigurationError)?;

    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(concat!("automap/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| OrsError::ConnectionFailed(e.to_string()))
}

/// Map a transport-level failure
pub(crate) fn map_send_error(err: &reqwest::Error, timeout_secs: u64) -> OrsError {
    if err.is_timeout() {
        OrsError::Timeout { timeout_secs }
    } else {
        OrsError::ConnectionFailed(err.to_string())
    }
}

/// Turn a non-success response into the matching error
///
/// `not_found` builds the error used for HTTP 404, which openrouteservice
/// returns when it cannot place a point on the road network.
pub(crate) async fn check_status(
    response: Response,
    not_found: impl FnOnce(Option<String>) -> OrsError,
) -> Result<Response, OrsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(OrsError::RateLimitExceeded {
            retry_after_secs: response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok()),
        });
    }

    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| api_error_message(&body));

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(OrsError::Unauthorized(
            message.unwrap_or_else(|| format!("HTTP {status}")),
        )),
        StatusCode::NOT_FOUND => Err(not_found(message)),
        _ => Err(OrsError::RequestFailed(match message {
            Some(msg) => format!("HTTP {status}: {msg}"),
            None => format!("HTTP {status}"),
        })),
    }
}

/// Extract the message from an openrouteservice error body
///
/// Both `{"error": {"code": .., "message": ..}}` and `{"error": ".."}` occur.
pub(crate) fn api_error_message(body: &str) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
    parsed.message()
}
