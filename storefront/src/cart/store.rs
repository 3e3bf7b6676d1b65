//! Cart store - the session's single source of truth for the shopping cart
//!
//! An insertion-ordered list of line items, unique by product id. Every
//! mutation is followed by a best-effort write to [`CartStorage`]; a write
//! failure is logged and the in-memory state stays authoritative for the
//! rest of the session. Rehydration happens once, in [`CartStore::open`].

use super::storage::CartStorage;
use parking_lot::RwLock;
use shared::models::{CartLineItem, Product};
use shared::util::now_millis;
use std::sync::Arc;

/// Shopping cart state container
///
/// Cheap to clone; all clones share the same state, so one store can be
/// handed to every consumer in the host application.
#[derive(Clone)]
pub struct CartStore {
    storage: CartStorage,
    storage_key: String,
    items: Arc<RwLock<Vec<CartLineItem>>>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("storage_key", &self.storage_key)
            .field("items", &self.items.read().len())
            .finish()
    }
}

impl CartStore {
    /// Open the cart store, rehydrating from storage.
    ///
    /// A missing entry or unreadable/unparseable stored value degrades to an
    /// empty cart; it is never an error.
    pub fn open(storage: CartStorage, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let items = match storage.load(&storage_key) {
            Ok(Some(items)) => {
                tracing::info!(count = items.len(), "cart rehydrated from storage");
                items
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to rehydrate cart, starting empty");
                Vec::new()
            }
        };

        Self {
            storage,
            storage_key,
            items: Arc::new(RwLock::new(items)),
        }
    }

    // ========== Mutations ==========

    /// Add a product to the cart.
    ///
    /// An existing line item for the same product id has its quantity
    /// incremented by `quantity` (no upper bound); otherwise a new line item
    /// is inserted with the current timestamp. `quantity` is assumed >= 1;
    /// callers validate user input first.
    pub fn add(&self, product: &Product, quantity: u32) {
        let mut items = self.items.write();
        match items.iter().position(|item| item.id == product.id) {
            Some(pos) => items[pos].quantity += quantity,
            None => items.push(CartLineItem::from_product(product, quantity, now_millis())),
        }
        self.persist(&items);
    }

    /// Replace a line item's quantity; 0 removes the line item.
    ///
    /// Unknown ids are ignored — a quantity without product metadata cannot
    /// become a line item.
    pub fn set_quantity(&self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }

        let mut items = self.items.write();
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            tracing::debug!(id, "set_quantity target not in cart, ignoring");
            return;
        };
        item.quantity = quantity;
        self.persist(&items);
    }

    /// Increase a line item's quantity by one; unknown ids are ignored
    pub fn increment(&self, id: &str) {
        let mut items = self.items.write();
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            tracing::debug!(id, "increment target not in cart, ignoring");
            return;
        };
        item.quantity += 1;
        self.persist(&items);
    }

    /// Decrease a line item's quantity by one, removing it at quantity 1
    pub fn decrement(&self, id: &str) {
        let mut items = self.items.write();
        let Some(pos) = items.iter().position(|item| item.id == id) else {
            tracing::debug!(id, "decrement target not in cart, ignoring");
            return;
        };
        if items[pos].quantity <= 1 {
            items.remove(pos);
        } else {
            items[pos].quantity -= 1;
        }
        self.persist(&items);
    }

    /// Remove a line item; no-op if absent
    pub fn remove(&self, id: &str) {
        let mut items = self.items.write();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() != before {
            self.persist(&items);
        }
    }

    /// Empty the cart
    pub fn clear(&self) {
        let mut items = self.items.write();
        items.clear();
        self.persist(&items);
    }

    // ========== Derived reads ==========

    /// All line items, in insertion order
    pub fn items(&self) -> Vec<CartLineItem> {
        self.items.read().clone()
    }

    /// The line item for a product id, if present
    pub fn line_item(&self, id: &str) -> Option<CartLineItem> {
        self.items.read().iter().find(|item| item.id == id).cloned()
    }

    /// Sum of all quantities
    pub fn total_items(&self) -> u32 {
        self.items.read().iter().map(|item| item.quantity).sum()
    }

    /// Sum of unit price × quantity over all line items, in cents
    pub fn total_price(&self) -> i64 {
        self.items.read().iter().map(CartLineItem::line_total).sum()
    }

    pub fn is_in_cart(&self, id: &str) -> bool {
        self.items.read().iter().any(|item| item.id == id)
    }

    /// Quantity of a product in the cart, 0 if absent
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.items
            .read()
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }

    /// Number of distinct line items
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Best-effort write-back; the in-memory state stays authoritative
    fn persist(&self, items: &[CartLineItem]) {
        if let Err(e) = self.storage.save(&self.storage_key, items) {
            tracing::warn!(error = %e, "failed to persist cart, keeping in-memory state");
        }
    }
}
