//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::services::{OrderServiceClient, ProductServiceClient, ServiceError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It holds only configuration
/// and the two service clients: the dashboard keeps no copy of product or
/// order data between requests.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    products: ProductServiceClient,
    orders: OrderServiceClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if a service HTTP client fails to build.
    pub fn new(config: AdminConfig) -> Result<Self, ServiceError> {
        let products = ProductServiceClient::new(&config.product_service_url)?;
        let orders = OrderServiceClient::new(&config.order_service_url)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                products,
                orders,
            }),
        })
    }

    /// Get a reference to the dashboard configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the product service client.
    #[must_use]
    pub fn products(&self) -> &ProductServiceClient {
        &self.inner.products
    }

    /// Get a reference to the order service client.
    #[must_use]
    pub fn orders(&self) -> &OrderServiceClient {
        &self.inner.orders
    }
}
