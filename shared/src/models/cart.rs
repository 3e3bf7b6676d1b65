//! Cart Model

use super::Product;
use serde::{Deserialize, Serialize};

/// Cart line item - a product snapshot plus quantity
///
/// Identity is the product id; a cart holds at most one line item per id.
/// Serializes in camelCase because the persisted layout stores line items as
/// a JSON array with `quantity` and `addedAt` alongside the product display
/// fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Product id
    pub id: String,
    pub name: String,
    /// Unit price in cents, frozen at add time
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Quantity, always >= 1 (a line item at 0 is removed instead)
    pub quantity: u32,
    /// Epoch milliseconds when the item first entered the cart
    pub added_at: i64,
}

impl CartLineItem {
    /// Snapshot a product into a new line item
    pub fn from_product(product: &Product, quantity: u32, added_at: i64) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            original_price: product.original_price,
            image: product.image.clone(),
            description: product.description.clone(),
            quantity,
            added_at,
        }
    }

    /// Unit price × quantity, in cents
    pub fn line_total(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }
}
