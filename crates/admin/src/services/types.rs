//! Wire types for the product and order services.
//!
//! Field names follow the services' JSON exactly (`_id`, `productId`,
//! `createdAt`); everything here round-trips through serde untouched, in the
//! order the services return it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use store_admin_core::{OrderId, OrderStatus, ProductId};

/// A product as returned by the product service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Prices travel as bare JSON numbers.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    pub stock: i64,
}

/// Payload for creating a product.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    pub stock: i64,
}

/// An order as returned by the order service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for the order status update.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}
