//! Email dispatch route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::services::email::{DeliveryStatus, EmailMessage};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct EmailResponse {
    pub status: DeliveryStatus,
    pub to: String,
}

/// `POST /api/email`: deliver `{to, subject, body}`.
pub async fn send_email(
    State(state): State<AppState>,
    Json(message): Json<EmailMessage>,
) -> Result<Json<EmailResponse>, StatusCode> {
    let status = state.mailer.send(&message).await.map_err(|e| {
        warn!(to = %message.to, error = %e, "email delivery failed");
        StatusCode::BAD_GATEWAY
    })?;
    Ok(Json(EmailResponse { status, to: message.to }))
}

#[cfg(test)]
#[path = "email_test.rs"]
mod tests;
