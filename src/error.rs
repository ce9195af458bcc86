use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Failures surfaced by the blink endpoint.
///
/// Every variant maps to a 500 response carrying the error text in a JSON
/// `message` field; the endpoint never distinguishes client- from
/// server-caused failures and never returns a partial transaction.
#[derive(Debug, Error)]
pub enum BlinkError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("encoding failed: {0}")]
    Encoding(String),

    #[error("store lookup failed: {0}")]
    Store(#[from] mongodb::error::Error),
}

impl IntoResponse for BlinkError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let body = Json(serde_json::json!({ "message": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_detail() {
        let err = BlinkError::InvalidAddress("not-a-pubkey".to_string());
        assert_eq!(err.to_string(), "invalid address: not-a-pubkey");
    }

    #[test]
    fn test_response_status() {
        let response = BlinkError::UpstreamUnavailable("rpc down".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
