//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the in-memory cart, the orders file store, the mailer and the
//! checkout orchestrator. Which downstream implementations checkout uses
//! depends on the services hosted by this process.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ServerConfig;
use crate::services::cart::CartStore;
use crate::services::checkout::Checkout;
use crate::services::downstream::{CartLink, DownstreamError, EmailSink, HttpCart, HttpEmail, LocalCart, LocalEmail};
use crate::services::email::{Mailer, mailer_from_config};
use crate::services::orders::OrderStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub cart: Arc<RwLock<CartStore>>,
    pub orders: Arc<OrderStore>,
    pub mailer: Arc<dyn Mailer>,
    pub checkout: Arc<Checkout>,
}

impl AppState {
    /// Wire stores and downstream links for the configured service.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client for a remote downstream cannot be built.
    pub fn from_config(config: &ServerConfig) -> Result<Self, DownstreamError> {
        let cart = Arc::new(RwLock::new(CartStore::new()));
        let orders = Arc::new(OrderStore::new(&config.orders_file));
        let mailer = mailer_from_config(&config.mail);

        let email: Arc<dyn EmailSink> = if config.service.hosts_email() {
            Arc::new(LocalEmail::new(Arc::clone(&mailer)))
        } else {
            Arc::new(HttpEmail::new(&config.email_endpoint, config.downstream_timeout_secs)?)
        };
        let cart_link: Arc<dyn CartLink> = if config.service.hosts_cart() {
            Arc::new(LocalCart::new(Arc::clone(&cart)))
        } else {
            Arc::new(HttpCart::new(&config.cart_endpoint, config.downstream_timeout_secs)?)
        };

        let checkout = Arc::new(Checkout::new(
            Arc::clone(&orders),
            email,
            cart_link,
            config.mail.admin_email.clone(),
            config.mail.from_name.clone(),
        ));

        Ok(Self { cart, orders, mailer, checkout })
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
