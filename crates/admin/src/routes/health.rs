//! Liveness health check endpoint.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Service identifier reported to infrastructure probes.
const SERVICE_NAME: &str = "store-admin";

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
}

/// Liveness health check endpoint.
///
/// Always reports healthy: the dashboard holds no state and its backend
/// services are checked by their own probes, so liveness here only means the
/// process is serving requests.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_payload_contract() {
        let Json(body) = health().await;

        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, "store-admin");
        assert!(chrono::DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_health_payload_field_names() {
        let Json(body) = health().await;
        let value = serde_json::to_value(&body).unwrap();

        assert!(value.get("status").is_some());
        assert!(value.get("service").is_some());
        assert!(value.get("timestamp").is_some());
    }
}
