//! Admin order listing route (read-only).

use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::orders::Order;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

/// `GET /api/orders`: every stored order; empty if the file is missing or unreadable.
pub async fn list_orders(State(state): State<AppState>) -> Json<OrdersResponse> {
    Json(OrdersResponse { orders: state.orders.load().await })
}

#[cfg(test)]
#[path = "orders_test.rs"]
mod tests;
