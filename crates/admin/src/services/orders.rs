//! Order service client.

use tracing::instrument;

use store_admin_core::{OrderId, OrderStatus};

use super::types::{Order, StatusUpdate};
use super::{ServiceError, error_for_status};

/// Client for the order service REST API.
#[derive(Clone)]
pub struct OrderServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl OrderServiceClient {
    /// Create a new order service client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(base_url: &str) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(super::REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Fetch every order, in the order the service returns them.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not an order array.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Order>, ServiceError> {
        let url = format!("{}/api/orders", self.base_url);

        let response = error_for_status(self.client.get(&url).send().await?).await?;
        response
            .json()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }

    /// Set an order's status and return the service's updated copy.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not an order.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ServiceError> {
        let url = format!("{}/api/orders/{id}", self.base_url);

        let response = error_for_status(
            self.client
                .patch(&url)
                .json(&StatusUpdate { status })
                .send()
                .await?,
        )
        .await?;
        response
            .json()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }
}
