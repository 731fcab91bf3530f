//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own storage and delivery concerns so route handlers can
//! stay focused on protocol translation.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod downstream;
pub mod email;
pub mod orders;
