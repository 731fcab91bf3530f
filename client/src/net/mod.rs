//! Networking for the storefront REST services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls behind the [`api::StorefrontApi`] seam, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
