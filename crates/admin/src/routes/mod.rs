//! HTTP route handlers for the dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to the products tab
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product list (`?new=1` shows the create form)
//! POST /products               - Create product
//! POST /products/{id}/delete   - Delete product
//!
//! # Orders
//! GET  /orders                 - Order list
//! POST /orders/{id}/status     - Advance an order's status
//! ```
//!
//! Mutating routes redirect back to their tab with a `notice` or `error`
//! query parameter; the base template renders it as a banner. The redirect is
//! also what re-fetches the affected list - there is no client-side state to
//! reconcile.

pub mod dashboard;
pub mod health;
pub mod orders;
pub mod products;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/{id}/delete", post(products::delete))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/{id}/status", post(orders::update_status))
}

/// Create the full application router (everything except `/health` and
/// `/static`, which are wired up in `main`).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .nest("/products", product_routes())
        .nest("/orders", order_routes())
}

/// Redirect back to a tab carrying a success banner.
pub(crate) fn redirect_with_notice(path: &str, message: &str) -> Redirect {
    Redirect::to(&format!("{path}?notice={}", urlencoding::encode(message)))
}

/// Redirect back to a tab carrying a failure banner.
pub(crate) fn redirect_with_error(path: &str, message: &str) -> Redirect {
    Redirect::to(&format!("{path}?error={}", urlencoding::encode(message)))
}
