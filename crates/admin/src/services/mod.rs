//! HTTP clients for the backend services.
//!
//! The dashboard owns no data: products live in the product service and
//! orders in the order service. These clients are thin JSON/REST wrappers
//! sharing one error taxonomy - transport failure, non-2xx response, and
//! malformed response body.

pub mod orders;
pub mod products;
pub mod types;

pub use orders::OrderServiceClient;
pub use products::ProductServiceClient;

use std::time::Duration;

use thiserror::Error;

/// Request timeout applied to every service call.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur when calling a backend service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Convert a non-2xx response into `ServiceError::Api`.
pub(crate) async fn error_for_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(ServiceError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let err = ServiceError::Api {
            status: 502,
            message: "upstream down".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 502 - upstream down");

        let err = ServiceError::Parse("expected array".to_string());
        assert_eq!(err.to_string(), "Parse error: expected array");
    }
}
