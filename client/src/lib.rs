//! Storefront for the RFID business-card shop.
//!
//! The storefront walks a customer through template selection, details
//! entry, preview, cart review and checkout against the shop's REST
//! services. It is headless: `controller` turns intents into state changes
//! and `render` turns state into text or markup for whatever front end
//! drives it.

pub mod controller;
pub mod net;
pub mod render;
pub mod state;
