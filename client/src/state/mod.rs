//! Storefront application state.
//!
//! DESIGN
//! ======
//! One explicit struct owned by the controller replaces page-global
//! variables. The cart mirror is private: it can only be replaced wholesale
//! or cleared, never patched, so it always reflects the last server read.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

pub mod details;
pub mod section;

pub use details::{CustomerDetails, Field};
pub use section::{Navigator, Section};

use crate::net::types::{CartItem, Template};

/// A write request currently awaiting its response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingAction {
    AddToCart,
    RemoveItem(u64),
    Checkout,
}

/// Enablement of the wizard's forward controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub next_from_select: bool,
    pub proceed_from_details: bool,
    pub add_to_cart: bool,
    pub checkout: bool,
    pub confirm: bool,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub templates: Vec<Template>,
    pub selected_template: Option<Template>,
    pub details: CustomerDetails,
    pub navigator: Navigator,
    pub last_order_id: Option<u64>,
    cart: Vec<CartItem>,
    alerts: Vec<String>,
    pending: Option<PendingAction>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the template list. A selection survives only if its id is
    /// still offered, and then points at the fresh copy.
    pub fn replace_templates(&mut self, templates: Vec<Template>) {
        self.selected_template = self
            .selected_template
            .take()
            .and_then(|sel| templates.iter().find(|t| t.id == sel.id).cloned());
        self.templates = templates;
    }

    /// Select the template with `id`; returns `false` if it is not offered.
    pub fn select_template(&mut self, id: &str) -> bool {
        match self.templates.iter().find(|t| t.id == id) {
            Some(t) => {
                self.selected_template = Some(t.clone());
                true
            }
            None => false,
        }
    }

    pub fn template(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    pub fn replace_cart(&mut self, items: Vec<CartItem>) {
        self.cart = items;
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn controls(&self) -> Controls {
        let selected = self.selected_template.is_some();
        let valid = self.details.is_valid();
        let idle = self.pending.is_none();
        let has_items = !self.cart.is_empty();
        Controls {
            next_from_select: selected,
            proceed_from_details: valid,
            add_to_cart: selected && valid && idle,
            checkout: has_items,
            confirm: has_items && valid && idle,
        }
    }

    pub fn pending(&self) -> Option<PendingAction> {
        self.pending
    }

    /// Mark a write as in flight until [`AppState::finish`].
    pub fn begin(&mut self, action: PendingAction) {
        self.pending = Some(action);
    }

    pub fn finish(&mut self) {
        self.pending = None;
    }

    /// Queue a blocking user-facing alert.
    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }
}
