//! Email delivery and order notification content.
//!
//! Delivery goes through Resend when an API key is configured; otherwise the
//! message is written to the log so local runs need no mail provider.

use std::sync::Arc;

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::orders::Order;
use crate::config::MailConfig;

#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// Body of `POST /api/email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Sent,
    Simulated,
}

#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one message.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError::Delivery`] if the provider rejects the message.
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryStatus, EmailError>;
}

/// Real delivery through the Resend API.
pub struct ResendMailer {
    client: Resend,
    from: String,
}

impl ResendMailer {
    #[must_use]
    pub fn new(api_key: &str, from_name: &str, from_email: &str) -> Self {
        Self { client: Resend::new(api_key), from: format!("{from_name} <{from_email}>") }
    }
}

#[async_trait::async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryStatus, EmailError> {
        let to = [message.to.as_str()];
        let email = CreateEmailBaseOptions::new(&self.from, to, &message.subject).with_text(&message.body);
        self.client
            .emails
            .send(email)
            .await
            .map_err(|e| EmailError::Delivery(e.to_string()))?;
        info!(to = %message.to, "sent email");
        Ok(DeliveryStatus::Sent)
    }
}

/// Logs the message instead of sending it.
pub struct SimulatedMailer {
    from: String,
}

impl SimulatedMailer {
    #[must_use]
    pub fn new(from_name: &str, from_email: &str) -> Self {
        Self { from: format!("{from_name} <{from_email}>") }
    }
}

#[async_trait::async_trait]
impl Mailer for SimulatedMailer {
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryStatus, EmailError> {
        info!(
            to = %message.to,
            from = %self.from,
            subject = %message.subject,
            body = %message.body,
            "simulated email"
        );
        Ok(DeliveryStatus::Simulated)
    }
}

/// Pick Resend when a key is configured, simulation otherwise.
#[must_use]
pub fn mailer_from_config(config: &MailConfig) -> Arc<dyn Mailer> {
    match config.resend_api_key.as_deref() {
        Some(key) => Arc::new(ResendMailer::new(key, &config.from_name, &config.from_email)),
        None => Arc::new(SimulatedMailer::new(&config.from_name, &config.from_email)),
    }
}

/// Customer confirmation followed by the admin notification.
///
/// The customer message is skipped when the order has no email address; the
/// admin message is skipped when no admin address is configured.
#[must_use]
pub fn order_emails(order: &Order, admin_email: Option<&str>, from_name: &str) -> Vec<EmailMessage> {
    let customer = &order.customer;
    let order_id = order.order_id;
    let mut messages = Vec::with_capacity(2);

    if !customer.email.trim().is_empty() {
        messages.push(EmailMessage {
            to: customer.email.clone(),
            subject: format!("Your RFID business card order #{order_id}"),
            body: format!(
                "Hello {name},\n\n\
                 Thank you for ordering your RFID-enabled business card.\n\
                 Your order ID is {order_id}. We will process your request and notify you once it is ready.\n\n\
                 Regards,\n{from_name}",
                name = customer.name,
            ),
        });
    }

    if let Some(admin) = admin_email.filter(|a| !a.trim().is_empty()) {
        messages.push(EmailMessage {
            to: admin.to_owned(),
            subject: format!("New RFID card order #{order_id}"),
            body: format!(
                "A new RFID business card order has been placed.\n\
                 Order ID: {order_id}\n\
                 Customer: {name} ({email})\n\
                 Number of items: {count}\n\
                 Please log into the admin portal to view full details.",
                name = customer.name,
                email = customer.email,
                count = order.items.len(),
            ),
        });
    }

    messages
}

#[cfg(test)]
#[path = "email_test.rs"]
mod tests;
