//! Order placement: persist, clear the cart, notify.
//!
//! ERROR HANDLING
//! ==============
//! Only persistence can fail a checkout. Cart clearing and emails are
//! best-effort: failures are logged and the order stands.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::cart::CartItem;
use super::downstream::{CartLink, EmailSink};
use super::email::order_emails;
use super::orders::{Customer, Order, OrderStore, OrderStoreError};

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("order has no items")]
    EmptyOrder,
    #[error("failed to persist order: {0}")]
    Persist(#[from] OrderStoreError),
}

/// Body of `POST /api/checkout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub customer: Customer,
    pub items: Vec<CartItem>,
}

/// A stored order plus the handle of its background notification task.
pub struct PlacedOrder {
    pub order: Order,
    pub notifications: JoinHandle<()>,
}

pub struct Checkout {
    orders: Arc<OrderStore>,
    email: Arc<dyn EmailSink>,
    cart: Arc<dyn CartLink>,
    admin_email: Option<String>,
    from_name: String,
}

impl Checkout {
    #[must_use]
    pub fn new(
        orders: Arc<OrderStore>,
        email: Arc<dyn EmailSink>,
        cart: Arc<dyn CartLink>,
        admin_email: Option<String>,
        from_name: String,
    ) -> Self {
        Self { orders, email, cart, admin_email, from_name }
    }

    /// Persist the order, then clear the cart and dispatch emails.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyOrder`] for an order without items and
    /// [`CheckoutError::Persist`] when the orders file cannot be updated.
    pub async fn place_order(&self, request: CheckoutRequest) -> Result<PlacedOrder, CheckoutError> {
        if request.items.is_empty() {
            return Err(CheckoutError::EmptyOrder);
        }

        let order = self.orders.append(request.customer, request.items).await?;
        info!(order_id = order.order_id, items = order.items.len(), "order persisted");

        // Cleared before responding so the storefront's follow-up reload sees an empty cart.
        match self.cart.clear().await {
            Ok(removed) => info!(order_id = order.order_id, ?removed, "cart cleared"),
            Err(e) => warn!(order_id = order.order_id, error = %e, "cart clear failed"),
        }

        let notifications = self.spawn_notifications(&order);
        Ok(PlacedOrder { order, notifications })
    }

    fn spawn_notifications(&self, order: &Order) -> JoinHandle<()> {
        let messages = order_emails(order, self.admin_email.as_deref(), &self.from_name);
        let email = Arc::clone(&self.email);
        let order_id = order.order_id;
        tokio::spawn(async move {
            for message in messages {
                match email.deliver(&message).await {
                    Ok(()) => info!(order_id, to = %message.to, subject = %message.subject, "email queued"),
                    Err(e) => warn!(order_id, to = %message.to, error = %e, "email send failed"),
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "checkout_test.rs"]
mod tests;
