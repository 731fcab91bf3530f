//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each service owns a small slice of the REST surface. A process serves one
//! slice, or with `SERVICE=all` every slice merged under a single origin so
//! the storefront can use relative `/api/...` paths against one base URL.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod email;
pub mod orders;

use axum::Router;
use axum::response::Json;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServiceKind;
use crate::state::AppState;

fn catalog_routes() -> Router<AppState> {
    Router::new().route("/api/catalog", get(catalog::get_catalog))
}

fn cart_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/cart",
            get(cart::list_cart).post(cart::add_cart_item).delete(cart::clear_cart),
        )
        .route("/api/cart/{item_id}", delete(cart::remove_cart_item))
}

fn checkout_routes() -> Router<AppState> {
    Router::new().route("/api/checkout", post(checkout::place_order))
}

fn email_routes() -> Router<AppState> {
    Router::new().route("/api/email", post(email::send_email))
}

fn orders_routes() -> Router<AppState> {
    Router::new().route("/api/orders", get(orders::list_orders))
}

/// Build the router for one service (or all of them).
pub fn app(state: AppState, service: ServiceKind) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = match service {
        ServiceKind::All => catalog_routes()
            .merge(cart_routes())
            .merge(checkout_routes())
            .merge(email_routes())
            .merge(orders_routes()),
        ServiceKind::Catalog => catalog_routes(),
        ServiceKind::Cart => cart_routes(),
        ServiceKind::Checkout => checkout_routes(),
        ServiceKind::Email => email_routes(),
        ServiceKind::Orders => orders_routes(),
    };

    routes
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
