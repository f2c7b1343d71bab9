//! Order tab handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use store_admin_core::{OrderId, OrderStatus, ProductId};

use crate::filters;
use crate::services::types::Order;
use crate::state::AppState;

use super::{redirect_with_error, redirect_with_notice};

/// Order display data for templates.
#[derive(Clone)]
pub struct OrderRow {
    pub id: OrderId,
    pub product_id: ProductId,
    pub quantity: i64,
    /// Wire status, doubling as the badge CSS class.
    pub status: &'static str,
    pub created_at: String,
    /// Action button, present only when the status has a next step.
    pub action: Option<OrderAction>,
}

/// The single action a non-terminal order offers.
#[derive(Clone)]
pub struct OrderAction {
    pub label: &'static str,
    pub target_status: &'static str,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        let action = match (order.status.action_label(), order.status.next()) {
            (Some(label), Some(next)) => Some(OrderAction {
                label,
                target_status: next.as_str(),
            }),
            _ => None,
        };

        Self {
            id: order.id.clone(),
            product_id: order.product_id.clone(),
            quantity: order.quantity,
            status: order.status.as_str(),
            created_at: order.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            action,
        }
    }
}

/// Query parameters for the orders page.
#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    /// Success banner from a completed action.
    pub notice: Option<String>,
    /// Failure banner from a completed action.
    pub error: Option<String>,
}

/// Orders page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    pub current_path: &'static str,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub orders: Vec<OrderRow>,
}

/// Display the orders tab.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> impl IntoResponse {
    let mut error = query.error;
    let orders = match state.orders().list().await {
        Ok(orders) => orders.iter().map(OrderRow::from).collect(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch orders");
            error.get_or_insert_with(|| "Failed to load orders".to_string());
            Vec::new()
        }
    };

    OrdersIndexTemplate {
        current_path: "/orders",
        notice: query.notice,
        error,
        orders,
    }
}

/// Status form for an order action.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    /// Requested target status.
    pub status: String,
}

/// Handle an order status action.
///
/// The transition table is checked against the order's *current* status
/// before anything is sent: the list endpoint doubles as the lookup, since
/// the order service exposes no single-order GET. Only then does the PATCH
/// go out.
#[instrument(skip(state, form))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Form(form): Form<StatusForm>,
) -> Response {
    // A target outside the handled set can only come from a hand-crafted
    // request; the rendered buttons never produce one.
    let Ok(target) = form.status.parse::<OrderStatus>() else {
        return (
            StatusCode::BAD_REQUEST,
            format!("Unknown order status: {}", form.status),
        )
            .into_response();
    };

    let orders = match state.orders().list().await {
        Ok(orders) => orders,
        Err(e) => {
            tracing::error!(order_id = %id, error = %e, "Failed to fetch orders before update");
            return redirect_with_error("/orders", "Failed to update order status").into_response();
        }
    };

    let Some(current) = orders
        .into_iter()
        .find(|order| order.id == id)
        .map(|order| order.status)
    else {
        tracing::warn!(order_id = %id, "Order vanished before status update");
        return redirect_with_error("/orders", "Failed to update order status").into_response();
    };

    if !current.can_transition_to(target) {
        tracing::warn!(
            order_id = %id,
            current = %current,
            target = %target,
            "Rejected status transition"
        );
        return redirect_with_error("/orders", "Failed to update order status").into_response();
    }

    match state.orders().update_status(&id, target).await {
        Ok(order) => {
            tracing::info!(order_id = %order.id, status = %order.status, "Order status updated");
            redirect_with_notice("/orders", "Order status updated!").into_response()
        }
        Err(e) => {
            tracing::error!(order_id = %id, error = %e, "Failed to update order status");
            redirect_with_error("/orders", "Failed to update order status").into_response()
        }
    }
}
