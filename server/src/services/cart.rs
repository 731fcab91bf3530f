//! In-memory cart store.
//!
//! DESIGN
//! ======
//! One cart per process, not persisted across restarts. Item ids come from a
//! monotonically increasing counter so a deleted id is never handed out again,
//! even after the cart is cleared by checkout.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/cart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItemRequest {
    pub template_id: String,
    pub student_id: String,
    pub name: String,
    pub institute: String,
    pub phone: String,
    pub email: String,
    pub room: String,
}

/// A cart line: the request plus its server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub item_id: u64,
    pub template_id: String,
    pub student_id: String,
    pub name: String,
    pub institute: String,
    pub phone: String,
    pub email: String,
    pub room: String,
}

#[derive(Debug, Default)]
pub struct CartStore {
    items: Vec<CartItem>,
    last_id: u64,
}

impl CartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn add(&mut self, req: CartItemRequest) -> CartItem {
        self.last_id += 1;
        let item = CartItem {
            item_id: self.last_id,
            template_id: req.template_id,
            student_id: req.student_id,
            name: req.name,
            institute: req.institute,
            phone: req.phone,
            email: req.email,
            room: req.room,
        };
        self.items.push(item.clone());
        item
    }

    /// Remove by id. Returns `false` when no such item exists.
    pub fn remove(&mut self, item_id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.item_id != item_id);
        self.items.len() != before
    }

    /// Empty the cart, returning how many items were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }
}

#[cfg(test)]
#[path = "cart_test.rs"]
pub(crate) mod tests;
