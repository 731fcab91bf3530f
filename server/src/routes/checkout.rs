//! Checkout route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::services::checkout::{CheckoutError, CheckoutRequest};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub status: String,
    pub order_id: u64,
}

/// `POST /api/checkout`: persist an order and trigger confirmation emails.
pub async fn place_order(
    State(state): State<AppState>,
    Json(body): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, StatusCode> {
    let placed = state.checkout.place_order(body).await.map_err(checkout_error_to_status)?;
    Ok(Json(CheckoutResponse { status: "success".into(), order_id: placed.order.order_id }))
}

pub(crate) fn checkout_error_to_status(err: CheckoutError) -> StatusCode {
    match err {
        CheckoutError::EmptyOrder => StatusCode::BAD_REQUEST,
        CheckoutError::Persist(e) => {
            error!(error = %e, "failed to persist order");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "checkout_test.rs"]
mod tests;
