//! Integration tests for the Algonquin Pet Store admin dashboard.
//!
//! # Test Categories
//!
//! - In-process tests drive the dashboard router directly with
//!   `tower::ServiceExt::oneshot` and require nothing to be running. They
//!   point the service clients at an address that refuses connections, which
//!   exercises the failed-fetch paths.
//! - Tests marked `#[ignore]` are end-to-end: they expect the dashboard and
//!   both backend services to be live.
//!
//! # Running Tests
//!
//! ```bash
//! # In-process tests
//! cargo test -p store-admin-integration-tests
//!
//! # End-to-end tests (dashboard on :3000, services on :3001/:3002)
//! cargo test -p store-admin-integration-tests -- --ignored
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::{IpAddr, Ipv4Addr};

use axum::{Router, routing::get};

use store_admin::config::AdminConfig;
use store_admin::routes;
use store_admin::state::AppState;

/// Build the dashboard router against arbitrary service URLs, for driving
/// with `tower::ServiceExt::oneshot` without a listening socket.
///
/// # Panics
///
/// Panics if state construction fails; tests have no error path to recover.
#[must_use]
pub fn test_app(product_service_url: &str, order_service_url: &str) -> Router {
    let config = AdminConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        product_service_url: product_service_url.to_string(),
        order_service_url: order_service_url.to_string(),
    };
    let state = AppState::new(config).expect("Failed to build test state");

    Router::new()
        .route("/health", get(routes::health::health))
        .merge(routes::routes())
        .with_state(state)
}
