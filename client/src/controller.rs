//! Intent dispatch for the ordering wizard.
//!
//! DESIGN
//! ======
//! The controller owns [`AppState`] and the API handle. Every UI action is
//! an [`Intent`]; `dispatch` maps it to one handler. Handlers perform at most
//! one mutating call, await it, then re-read whatever the call changed.
//! Taking `&mut self` keeps intents strictly sequential, so a second write
//! cannot start while one is in flight. Write handlers mark the state as
//! pending for the duration of the call.
//!
//! ERROR HANDLING
//! ==============
//! Failed reads (catalog, cart) are logged and leave the view degraded.
//! Failed writes (add, remove, checkout) raise exactly one alert and leave
//! the cart mirror and active section untouched. Nothing is retried.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use tracing::{debug, info, warn};

use crate::net::api::StorefrontApi;
use crate::net::types::OrderPayload;
use crate::render::{self, CheckoutSummary, PreviewCard, TemplateCard};
use crate::state::{AppState, CustomerDetails, Field, PendingAction, Section};

/// A user action fed to [`Storefront::dispatch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Page load: fetch the catalog, then the cart.
    Load,
    ReloadCart,
    SelectTemplate(String),
    /// Leave the template list for the details form.
    Next,
    UpdateDetails(CustomerDetails),
    SetField(Field, String),
    /// Submit the details form, showing the preview.
    SubmitDetails,
    /// Recompute the preview for the front end; changes no state.
    Preview,
    AddToCart,
    RemoveItem(u64),
    GoToCheckout,
    ConfirmCheckout,
    /// Re-read the cart and show it; refused while it is empty.
    ViewCart,
    Back,
    Home,
}

pub struct Storefront<A> {
    api: A,
    state: AppState,
}

impl<A: StorefrontApi> Storefront<A> {
    pub fn new(api: A) -> Self {
        Self { api, state: AppState::new() }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn active(&self) -> Section {
        self.state.navigator.active()
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        self.state.take_alerts()
    }

    pub async fn dispatch(&mut self, intent: Intent) {
        debug!(?intent, section = self.active().as_str(), "dispatch");
        match intent {
            Intent::Load => {
                self.load_catalog().await;
                self.load_cart().await;
            }
            Intent::ReloadCart => self.load_cart().await,
            Intent::SelectTemplate(id) => self.select_template(&id),
            Intent::Next => self.next(),
            Intent::UpdateDetails(details) => self.state.details = details,
            Intent::SetField(field, value) => self.state.details.set(field, value),
            Intent::SubmitDetails => self.submit_details(),
            Intent::Preview => self.refresh_preview(),
            Intent::AddToCart => self.add_to_cart().await,
            Intent::RemoveItem(item_id) => self.remove_item(item_id).await,
            Intent::GoToCheckout => self.go_to_checkout(),
            Intent::ConfirmCheckout => self.confirm_checkout().await,
            Intent::Back => {
                self.state.navigator.back();
            }
            Intent::Home => self.state.navigator.home(),
            Intent::ViewCart => self.view_cart().await,
        }
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    pub fn template_cards(&self) -> Vec<TemplateCard> {
        render::template_cards(&self.state.templates, self.state.selected_template.as_ref())
    }

    pub fn preview(&self) -> Option<PreviewCard> {
        render::preview(self.state.selected_template.as_ref(), &self.state.details)
    }

    pub fn checkout_summary(&self) -> CheckoutSummary {
        render::checkout_summary(self.state.cart(), &self.state.details, &self.state.templates)
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// Fetch the catalog; on failure keep whatever list is shown (empty at start).
    pub async fn load_catalog(&mut self) {
        match self.api.list_templates().await {
            Ok(templates) => {
                info!(count = templates.len(), "catalog loaded");
                self.state.replace_templates(templates);
            }
            Err(e) => warn!(error = %e, "failed to load templates"),
        }
    }

    /// Replace the cart mirror with the server's cart.
    pub async fn load_cart(&mut self) {
        match self.api.list_cart().await {
            Ok(items) => {
                debug!(count = items.len(), "cart loaded");
                self.state.replace_cart(items);
            }
            Err(e) => warn!(error = %e, "failed to load cart"),
        }
    }

    // =========================================================================
    // LOCAL TRANSITIONS
    // =========================================================================

    fn select_template(&mut self, id: &str) {
        if !self.state.select_template(id) {
            warn!(template_id = id, "unknown template selected");
        }
    }

    fn next(&mut self) {
        if self.state.selected_template.is_none() {
            self.state.alert("Please select a template first.");
            return;
        }
        self.state.navigator.show(Section::Details);
    }

    fn submit_details(&mut self) {
        if self.state.selected_template.is_none() {
            self.state.alert("Please select a template first.");
            return;
        }
        if self.require_valid_details() {
            self.state.navigator.show(Section::Preview);
        }
    }

    fn refresh_preview(&self) {
        match self.preview() {
            Some(card) => debug!(template = %card.template_name, "preview refreshed"),
            None => debug!("preview requested without a template"),
        }
    }

    async fn view_cart(&mut self) {
        self.load_cart().await;
        if self.state.cart().is_empty() {
            self.state.alert("Your cart is empty.");
            return;
        }
        self.state.navigator.show(Section::Cart);
    }

    fn go_to_checkout(&mut self) {
        if self.state.cart().is_empty() {
            self.state.alert("Your cart is empty.");
            return;
        }
        self.state.navigator.show(Section::Checkout);
    }

    fn require_valid_details(&mut self) -> bool {
        let missing = self.state.details.missing_fields();
        if missing.is_empty() {
            return true;
        }
        let names: Vec<&str> = missing.into_iter().map(Field::label).collect();
        self.state.alert(format!("Please fill in: {}.", names.join(", ")));
        false
    }

    // =========================================================================
    // WRITES
    // =========================================================================

    async fn add_to_cart(&mut self) {
        let Some(template) = self.state.selected_template.clone() else {
            self.state.alert("Please select a template first.");
            return;
        };
        if !self.require_valid_details() {
            return;
        }
        self.state.begin(PendingAction::AddToCart);
        let request = self.state.details.to_add_request(&template.id);
        let result = self.api.add_to_cart(&request).await;
        self.state.finish();

        match result {
            Ok(item) => {
                info!(item_id = ?item.map(|i| i.item_id), template_id = %template.id, "added to cart");
                self.load_cart().await;
                self.state.navigator.show(Section::Cart);
            }
            Err(e) => {
                warn!(error = %e, "add to cart failed");
                self.state.alert(format!("Could not add to cart: {e}"));
            }
        }
    }

    async fn remove_item(&mut self, item_id: u64) {
        self.state.begin(PendingAction::RemoveItem(item_id));
        let result = self.api.remove_from_cart(item_id).await;
        self.state.finish();

        match result {
            Ok(()) => {
                info!(item_id, "removed from cart");
                self.load_cart().await;
            }
            Err(e) => {
                warn!(item_id, error = %e, "remove from cart failed");
                self.state.alert(format!("Could not remove item #{item_id}: {e}"));
            }
        }
    }

    async fn confirm_checkout(&mut self) {
        if self.state.cart().is_empty() {
            self.state.alert("Your cart is empty.");
            return;
        }
        if !self.require_valid_details() {
            return;
        }
        self.state.begin(PendingAction::Checkout);
        let payload = OrderPayload {
            customer: self.state.details.to_checkout_customer(),
            items: self.state.cart().to_vec(),
        };
        let result = self.api.checkout(&payload).await;
        self.state.finish();

        match result {
            Ok(order_id) => {
                info!(?order_id, items = payload.items.len(), "checkout complete");
                self.state.last_order_id = order_id;
                self.state.clear_cart();
                self.load_cart().await;
                self.state.navigator.show(Section::Confirmation);
            }
            Err(e) => {
                warn!(error = %e, "checkout failed");
                self.state.alert(format!("Checkout failed: {e}"));
            }
        }
    }
}
