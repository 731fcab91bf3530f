//! Cart routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::services::cart::{CartItem, CartItemRequest};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct CartListResponse {
    pub items: Vec<CartItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddCartItemResponse {
    pub status: String,
    pub item: CartItem,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClearCartResponse {
    pub status: String,
    pub removed: usize,
}

/// `GET /api/cart`: all items currently in the cart.
pub async fn list_cart(State(state): State<AppState>) -> Json<CartListResponse> {
    let items = state.cart.read().await.items().to_vec();
    Json(CartListResponse { items })
}

/// `POST /api/cart`: add an item; the server assigns its `item_id`.
pub async fn add_cart_item(
    State(state): State<AppState>,
    Json(body): Json<CartItemRequest>,
) -> (StatusCode, Json<AddCartItemResponse>) {
    let item = state.cart.write().await.add(body);
    info!(item_id = item.item_id, template_id = %item.template_id, "cart item added");
    (StatusCode::CREATED, Json(AddCartItemResponse { status: "added".into(), item }))
}

/// `DELETE /api/cart/:item_id`: remove one item.
pub async fn remove_cart_item(
    State(state): State<AppState>,
    Path(item_id): Path<u64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if !state.cart.write().await.remove(item_id) {
        return Err(StatusCode::NOT_FOUND);
    }
    info!(item_id, "cart item removed");
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

/// `DELETE /api/cart`: empty the cart (used by checkout).
pub async fn clear_cart(State(state): State<AppState>) -> Json<ClearCartResponse> {
    let removed = state.cart.write().await.clear();
    info!(removed, "cart cleared");
    Json(ClearCartResponse { status: "cleared".into(), removed })
}

#[cfg(test)]
#[path = "cart_test.rs"]
mod tests;
