//! Order persistence in a single JSON array file.
//!
//! DESIGN
//! ======
//! Checkout appends, the orders service only reads. Appends are serialised
//! behind a mutex and rewrite the whole file; order ids continue from the
//! last stored order.
//!
//! ERROR HANDLING
//! ==============
//! Reads degrade to an empty list (a missing file simply means no orders).
//! Appends refuse to proceed when an existing file cannot be decoded, so a
//! corrupt file is never silently replaced by a one-order list.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::sync::Mutex;
use tracing::warn;

use super::cart::CartItem;

#[derive(Debug, thiserror::Error)]
pub enum OrderStoreError {
    #[error("orders file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("orders file is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Customer block of an order. The student id travels as `id` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "id")]
    pub student_id: String,
    pub name: String,
    pub institute: String,
    pub phone: String,
    pub email: String,
    pub room: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: u64,
    pub customer: Customer,
    pub items: Vec<CartItem>,
    /// RFC 3339 UTC timestamp; absent on orders written by older builds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placed_at: Option<String>,
}

pub struct OrderStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl OrderStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored orders; empty when the file is missing or unreadable.
    pub async fn load(&self) -> Vec<Order> {
        match self.read().await {
            Ok(orders) => orders,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "orders file unreadable; listing none");
                Vec::new()
            }
        }
    }

    /// Append a new order with the next sequential id.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing file cannot be read or decoded, or the
    /// updated list cannot be written.
    pub async fn append(&self, customer: Customer, items: Vec<CartItem>) -> Result<Order, OrderStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut orders = self.read().await?;
        let order_id = orders.last().map_or(1, |o| o.order_id + 1);
        let order = Order { order_id, customer, items, placed_at: now_rfc3339() };
        orders.push(order.clone());
        self.write(&orders).await?;
        Ok(order)
    }

    async fn read(&self) -> Result<Vec<Order>, OrderStoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn write(&self, orders: &[Order]) -> Result<(), OrderStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_vec_pretty(orders)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

fn now_rfc3339() -> Option<String> {
    OffsetDateTime::now_utc().format(&Rfc3339).ok()
}

#[cfg(test)]
#[path = "orders_test.rs"]
pub(crate) mod tests;
