//! Calls checkout makes into the email and cart services.
//!
//! DESIGN
//! ======
//! When checkout shares a process with the target service (`SERVICE=all`)
//! the call goes straight to the in-process store or mailer. Otherwise it is
//! a bounded-timeout HTTP request to the configured endpoint. Callers treat
//! every failure here as non-fatal.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use super::cart::CartStore;
use super::email::{EmailError, EmailMessage, Mailer};

#[derive(Debug, thiserror::Error)]
pub enum DownstreamError {
    #[error("downstream request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("downstream returned status {0}")]
    Status(u16),
    #[error(transparent)]
    Email(#[from] EmailError),
}

#[async_trait::async_trait]
pub trait EmailSink: Send + Sync {
    async fn deliver(&self, message: &EmailMessage) -> Result<(), DownstreamError>;
}

#[async_trait::async_trait]
pub trait CartLink: Send + Sync {
    /// Empty the cart, returning how many items were removed when known.
    async fn clear(&self) -> Result<Option<usize>, DownstreamError>;
}

// =============================================================================
// IN-PROCESS
// =============================================================================

pub struct LocalEmail {
    mailer: Arc<dyn Mailer>,
}

impl LocalEmail {
    #[must_use]
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }
}

#[async_trait::async_trait]
impl EmailSink for LocalEmail {
    async fn deliver(&self, message: &EmailMessage) -> Result<(), DownstreamError> {
        self.mailer.send(message).await?;
        Ok(())
    }
}

pub struct LocalCart {
    store: Arc<RwLock<CartStore>>,
}

impl LocalCart {
    #[must_use]
    pub fn new(store: Arc<RwLock<CartStore>>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl CartLink for LocalCart {
    async fn clear(&self) -> Result<Option<usize>, DownstreamError> {
        Ok(Some(self.store.write().await.clear()))
    }
}

// =============================================================================
// HTTP
// =============================================================================

fn http_client(timeout_secs: u64) -> Result<reqwest::Client, DownstreamError> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?)
}

/// `POST {endpoint}` with `{to, subject, body}`.
pub struct HttpEmail {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpEmail {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Result<Self, DownstreamError> {
        Ok(Self { client: http_client(timeout_secs)?, endpoint: endpoint.into() })
    }
}

#[async_trait::async_trait]
impl EmailSink for HttpEmail {
    async fn deliver(&self, message: &EmailMessage) -> Result<(), DownstreamError> {
        let resp = self.client.post(&self.endpoint).json(message).send().await?;
        if !resp.status().is_success() {
            return Err(DownstreamError::Status(resp.status().as_u16()));
        }
        Ok(())
    }
}

/// `DELETE {endpoint}` against the cart collection.
pub struct HttpCart {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(serde::Deserialize)]
struct ClearedBody {
    removed: Option<usize>,
}

impl HttpCart {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Result<Self, DownstreamError> {
        Ok(Self { client: http_client(timeout_secs)?, endpoint: endpoint.into() })
    }
}

#[async_trait::async_trait]
impl CartLink for HttpCart {
    async fn clear(&self) -> Result<Option<usize>, DownstreamError> {
        let resp = self.client.delete(&self.endpoint).send().await?;
        if !resp.status().is_success() {
            return Err(DownstreamError::Status(resp.status().as_u16()));
        }
        let body = resp.json::<ClearedBody>().await.ok();
        Ok(body.and_then(|b| b.removed))
    }
}
