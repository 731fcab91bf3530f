//! Wire DTOs for the storefront REST surface.
//!
//! DESIGN
//! ======
//! Field names match the service JSON exactly. Response envelopes are kept
//! separate from the domain types so callers only ever see the payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A selectable business-card design.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
}

/// A server-held cart line. The client never edits these in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub item_id: u64,
    pub template_id: String,
    pub student_id: String,
    pub name: String,
    pub institute: String,
    pub phone: String,
    pub email: String,
    pub room: String,
}

/// Body of `POST /api/cart`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCartItem {
    pub template_id: String,
    pub student_id: String,
    pub name: String,
    pub institute: String,
    pub phone: String,
    pub email: String,
    pub room: String,
}

/// Customer block of the checkout payload; the student id is sent as `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutCustomer {
    pub id: String,
    pub name: String,
    pub institute: String,
    pub phone: String,
    pub email: String,
    pub room: String,
}

/// Body of `POST /api/checkout`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub customer: CheckoutCustomer,
    pub items: Vec<CartItem>,
}

/// A persisted order as listed by `GET /api/orders`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: u64,
    pub customer: CheckoutCustomer,
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub placed_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CatalogEnvelope {
    pub templates: Vec<Template>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CartEnvelope {
    pub items: Vec<CartItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddedEnvelope {
    pub item: CartItem,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrdersEnvelope {
    pub orders: Vec<Order>,
}

/// `POST /api/checkout` success body. Only the order id is used.
#[derive(Debug, Deserialize)]
pub(crate) struct CheckoutReceipt {
    #[serde(default)]
    pub order_id: Option<u64>,
}
