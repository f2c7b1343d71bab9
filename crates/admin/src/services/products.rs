//! Product service client.

use tracing::instrument;

use store_admin_core::ProductId;

use super::types::{NewProduct, Product};
use super::{ServiceError, error_for_status};

/// Client for the product service REST API.
#[derive(Clone)]
pub struct ProductServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProductServiceClient {
    /// Create a new product service client.
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

    /// Fetch every product, in the order the service returns them.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a product array.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        let url = format!("{}/api/products", self.base_url);

        let response = error_for_status(self.client.get(&url).send().await?).await?;
        response
            .json()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }

    /// Create a product and return the service's copy of it.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a product.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: &NewProduct) -> Result<Product, ServiceError> {
        let url = format!("{}/api/products", self.base_url);

        let response = error_for_status(self.client.post(&url).json(input).send().await?).await?;
        response
            .json()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }

    /// Delete a product by identifier.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &ProductId) -> Result<(), ServiceError> {
        let url = format!("{}/api/products/{id}", self.base_url);

        error_for_status(self.client.delete(&url).send().await?).await?;
        Ok(())
    }
}
