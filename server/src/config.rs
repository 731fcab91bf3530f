//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_ORDERS_FILE: &str = "data/orders.json";
pub const DEFAULT_EMAIL_ENDPOINT: &str = "http://localhost:8004/api/email";
pub const DEFAULT_CART_ENDPOINT: &str = "http://localhost:8002/api/cart";
pub const DEFAULT_FROM_NAME: &str = "University Card Authority";
pub const DEFAULT_FROM_EMAIL: &str = "noreply@university.edu";
pub const DEFAULT_DOWNSTREAM_TIMEOUT_SECS: u64 = 8;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown SERVICE: {0}")]
    UnknownService(String),
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

/// Which REST surface this process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// Every service merged behind one origin.
    All,
    Catalog,
    Cart,
    Checkout,
    Email,
    Orders,
}

impl ServiceKind {
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "catalog" => Some(Self::Catalog),
            "cart" => Some(Self::Cart),
            "checkout" => Some(Self::Checkout),
            "email" => Some(Self::Email),
            "orders" => Some(Self::Orders),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Catalog => "catalog",
            Self::Cart => "cart",
            Self::Checkout => "checkout",
            Self::Email => "email",
            Self::Orders => "orders",
        }
    }

    /// Port used when `PORT` is not set.
    #[must_use]
    pub fn default_port(self) -> u16 {
        match self {
            Self::All => 8000,
            Self::Catalog => 8001,
            Self::Cart => 8002,
            Self::Checkout => 8003,
            Self::Email => 8004,
            Self::Orders => 8005,
        }
    }

    /// Whether the cart store lives in this process.
    #[must_use]
    pub fn hosts_cart(self) -> bool {
        matches!(self, Self::All | Self::Cart)
    }

    /// Whether email delivery happens in this process.
    #[must_use]
    pub fn hosts_email(self) -> bool {
        matches!(self, Self::All | Self::Email)
    }
}

/// Delivery settings shared by the email service and checkout notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub resend_api_key: Option<String>,
    pub from_email: String,
    pub from_name: String,
    pub admin_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub service: ServiceKind,
    pub port: u16,
    pub orders_file: PathBuf,
    pub email_endpoint: String,
    pub cart_endpoint: String,
    pub downstream_timeout_secs: u64,
    pub mail: MailConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `SERVICE`: `all` (default), `catalog`, `cart`, `checkout`, `email`, `orders`
    /// - `PORT`: per-service default when absent
    /// - `ORDERS_FILE`: default `data/orders.json`
    /// - `EMAIL_ENDPOINT`, `CART_ENDPOINT`: downstream URLs used by checkout
    /// - `ADMIN_EMAIL`: admin notification recipient; none when unset or blank
    /// - `FROM_NAME`, `FROM_EMAIL`: sender identity
    /// - `RESEND_API_KEY`: real delivery; simulated when unset or blank
    /// - `DOWNSTREAM_TIMEOUT_SECS`: default 8
    ///
    /// # Errors
    ///
    /// Returns an error if `SERVICE` names an unknown service or `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let service = match std::env::var("SERVICE") {
            Ok(raw) => ServiceKind::from_str(&raw).ok_or(ConfigError::UnknownService(raw))?,
            Err(_) => ServiceKind::All,
        };

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => service.default_port(),
        };

        let orders_file = std::env::var("ORDERS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ORDERS_FILE));

        let mail = MailConfig {
            resend_api_key: env_non_empty("RESEND_API_KEY"),
            from_email: env_non_empty("FROM_EMAIL").unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_owned()),
            from_name: env_non_empty("FROM_NAME").unwrap_or_else(|| DEFAULT_FROM_NAME.to_owned()),
            admin_email: env_non_empty("ADMIN_EMAIL"),
        };

        Ok(Self {
            service,
            port,
            orders_file,
            email_endpoint: env_non_empty("EMAIL_ENDPOINT").unwrap_or_else(|| DEFAULT_EMAIL_ENDPOINT.to_owned()),
            cart_endpoint: env_non_empty("CART_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_CART_ENDPOINT.to_owned())
                .trim_end_matches('/')
                .to_owned(),
            downstream_timeout_secs: env_parse("DOWNSTREAM_TIMEOUT_SECS", DEFAULT_DOWNSTREAM_TIMEOUT_SECS),
            mail,
        })
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
