//! REST client for the storefront services.
//!
//! All paths are relative to one base URL (the common origin). Any non-2xx
//! response is a failure; success bodies are decoded without further
//! validation. No timeouts and no retries are applied.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed [`ApiError`] and decide whether it is logged or
//! surfaced; this layer never logs on its own.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{
    AddCartItem, AddedEnvelope, CartEnvelope, CartItem, CatalogEnvelope, CheckoutReceipt, Order, OrderPayload,
    OrdersEnvelope, Template,
};

pub const CATALOG_PATH: &str = "/api/catalog";
pub const CART_PATH: &str = "/api/cart";
pub const CHECKOUT_PATH: &str = "/api/checkout";
pub const ORDERS_PATH: &str = "/api/orders";
pub const HEALTH_PATH: &str = "/healthz";

fn cart_item_endpoint(item_id: u64) -> String {
    format!("{CART_PATH}/{item_id}")
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("{operation} request failed: {message}")]
    Transport { operation: &'static str, message: String },
    /// The service answered with a non-2xx status.
    #[error("{operation} failed: HTTP {status}")]
    Status { operation: &'static str, status: u16 },
    /// A 2xx body did not have the expected shape.
    #[error("{operation} returned an unexpected body: {message}")]
    Decode { operation: &'static str, message: String },
}

impl ApiError {
    /// HTTP status for [`ApiError::Status`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The remote calls the storefront controller depends on.
#[async_trait::async_trait]
pub trait StorefrontApi: Send + Sync {
    /// `GET /api/catalog`.
    async fn list_templates(&self) -> Result<Vec<Template>, ApiError>;

    /// `GET /api/cart`.
    async fn list_cart(&self) -> Result<Vec<CartItem>, ApiError>;

    /// `POST /api/cart`; returns the stored item when the body carries one.
    async fn add_to_cart(&self, item: &AddCartItem) -> Result<Option<CartItem>, ApiError>;

    /// `DELETE /api/cart/{item_id}`; the response body is ignored.
    async fn remove_from_cart(&self, item_id: u64) -> Result<(), ApiError>;

    /// `POST /api/checkout`; returns the order id when the service reports one.
    async fn checkout(&self, order: &OrderPayload) -> Result<Option<u64>, ApiError>;
}

/// [`StorefrontApi`] over HTTP with `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self { client, base_url: base_url.trim_end_matches('/').to_owned() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /api/orders` (admin listing).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a malformed body.
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        let body: OrdersEnvelope = self.get_json("list orders", ORDERS_PATH).await?;
        Ok(body.orders)
    }

    /// `GET /healthz`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-2xx status.
    pub async fn health(&self) -> Result<(), ApiError> {
        self.send("health check", self.client.get(self.url(HEALTH_PATH))).await?;
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, operation: &'static str, path: &str) -> Result<T, ApiError> {
        let bytes = self.send(operation, self.client.get(self.url(path))).await?;
        decode(operation, &bytes)
    }

    async fn send(&self, operation: &'static str, request: reqwest::RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Transport { operation, message: e.to_string() })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { operation, status: status.as_u16() });
        }
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ApiError::Transport { operation, message: e.to_string() })?;
        Ok(bytes.to_vec())
    }
}

fn decode<T: DeserializeOwned>(operation: &'static str, bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|e| ApiError::Decode { operation, message: e.to_string() })
}

#[async_trait::async_trait]
impl StorefrontApi for HttpApi {
    async fn list_templates(&self) -> Result<Vec<Template>, ApiError> {
        let body: CatalogEnvelope = self.get_json("list templates", CATALOG_PATH).await?;
        Ok(body.templates)
    }

    async fn list_cart(&self) -> Result<Vec<CartItem>, ApiError> {
        let body: CartEnvelope = self.get_json("list cart", CART_PATH).await?;
        Ok(body.items)
    }

    async fn add_to_cart(&self, item: &AddCartItem) -> Result<Option<CartItem>, ApiError> {
        let bytes = self
            .send("add to cart", self.client.post(self.url(CART_PATH)).json(item))
            .await?;
        // Any 2xx is a successful add; the stored item is informational.
        Ok(serde_json::from_slice::<AddedEnvelope>(&bytes).ok().map(|e| e.item))
    }

    async fn remove_from_cart(&self, item_id: u64) -> Result<(), ApiError> {
        let url = self.url(&cart_item_endpoint(item_id));
        self.send("remove from cart", self.client.delete(url)).await?;
        Ok(())
    }

    async fn checkout(&self, order: &OrderPayload) -> Result<Option<u64>, ApiError> {
        let bytes = self
            .send("checkout", self.client.post(self.url(CHECKOUT_PATH)).json(order))
            .await?;
        // The success body is not part of the contract; tolerate anything.
        Ok(serde_json::from_slice::<CheckoutReceipt>(&bytes)
            .ok()
            .and_then(|r| r.order_id))
    }
}
