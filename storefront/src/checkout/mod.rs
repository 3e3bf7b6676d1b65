//! Checkout handoff
//!
//! Assembles the cart into the payload handed to the external payment
//! provider. This system's responsibility ends at producing a valid,
//! non-empty session; payment success or failure is entirely external.

use crate::cart::CartStore;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::CartLineItem;
use shared::util::now_millis;
use thiserror::Error;
use uuid::Uuid;

/// Checkout errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The host renders this as a disabled checkout button / empty-cart view
    #[error("cart is empty")]
    EmptyCart,
}

/// One line of the handoff payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutLineItem {
    pub id: String,
    pub name: String,
    /// Unit price in cents
    pub unit_price: i64,
    pub quantity: u32,
    pub image: String,
}

/// Payload handed to the external redirect-based checkout flow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    /// Unique id for this handoff attempt
    pub session_id: String,
    /// ISO 4217 currency code
    pub currency: String,
    pub line_items: Vec<CheckoutLineItem>,
    /// Sum of unit price × quantity, in cents
    pub subtotal: i64,
    /// Epoch milliseconds
    pub created_at: i64,
}

impl CheckoutSession {
    /// Subtotal as a display string ("$74.97")
    pub fn formatted_subtotal(&self) -> String {
        format_cents(self.subtotal)
    }
}

/// Build a checkout session from the current cart.
///
/// Fails with [`CheckoutError::EmptyCart`] when there is nothing to hand
/// off; everything else about payment lives outside this system.
pub fn begin_checkout(cart: &CartStore, currency: &str) -> Result<CheckoutSession, CheckoutError> {
    let items = cart.items();
    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let line_items: Vec<CheckoutLineItem> = items
        .iter()
        .map(|item| CheckoutLineItem {
            id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            quantity: item.quantity,
            image: item.image.clone(),
        })
        .collect();
    let subtotal: i64 = items.iter().map(CartLineItem::line_total).sum();

    let session = CheckoutSession {
        session_id: Uuid::new_v4().to_string(),
        currency: currency.to_string(),
        line_items,
        subtotal,
        created_at: now_millis(),
    };
    tracing::info!(
        session_id = %session.session_id,
        items = session.line_items.len(),
        subtotal = session.subtotal,
        "checkout session created"
    );
    Ok(session)
}

/// Order summary shown beside the cart
///
/// All amounts in cents. Tax, shipping, and discount are estimates supplied
/// by the host; the cart itself only knows the subtotal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartSummary {
    pub subtotal: i64,
    pub tax: i64,
    pub shipping: i64,
    pub discount: i64,
}

impl CartSummary {
    /// Summary with the cart's subtotal and no estimates
    pub fn for_cart(cart: &CartStore) -> Self {
        Self {
            subtotal: cart.total_price(),
            ..Self::default()
        }
    }

    pub fn with_tax(mut self, tax: i64) -> Self {
        self.tax = tax;
        self
    }

    pub fn with_shipping(mut self, shipping: i64) -> Self {
        self.shipping = shipping;
        self
    }

    pub fn with_discount(mut self, discount: i64) -> Self {
        self.discount = discount;
        self
    }

    /// subtotal + tax + shipping − discount
    pub fn total(&self) -> i64 {
        self.subtotal + self.tax + self.shipping - self.discount
    }

    pub fn formatted_total(&self) -> String {
        format_cents(self.total())
    }
}

/// Format a cent amount as a dollar display string
pub fn format_cents(cents: i64) -> String {
    let amount = Decimal::new(cents.abs(), 2);
    if cents < 0 {
        format!("-${amount}")
    } else {
        format!("${amount}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStorage;
    use shared::models::Product;

    fn cart_with(items: &[(&str, i64, u32)]) -> CartStore {
        let cart = CartStore::open(CartStorage::open_in_memory().unwrap(), "stylehub_cart");
        for (id, price, quantity) in items {
            let product = Product {
                id: id.to_string(),
                name: format!("Product {id}"),
                description: None,
                price: *price,
                original_price: None,
                discount: None,
                category: "Clothing".to_string(),
                subcategory: None,
                image: format!("https://example.com/{id}.jpg"),
                images: vec![],
                rating: None,
                review_count: None,
                colors: vec![],
                sizes: vec![],
                in_stock: true,
                is_new: false,
                is_best_seller: false,
                tags: vec![],
            };
            cart.add(&product, *quantity);
        }
        cart
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let cart = cart_with(&[]);
        assert_eq!(begin_checkout(&cart, "USD"), Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_session_carries_lines_and_subtotal() {
        let cart = cart_with(&[("p1", 2499, 3), ("p8", 899, 1)]);
        let session = begin_checkout(&cart, "USD").unwrap();

        assert_eq!(session.currency, "USD");
        assert_eq!(session.line_items.len(), 2);
        assert_eq!(session.subtotal, 2499 * 3 + 899);
        assert!(!session.session_id.is_empty());
        assert_eq!(session.formatted_subtotal(), "$83.96");
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        let cart = cart_with(&[("p1", 100, 1)]);
        let a = begin_checkout(&cart, "USD").unwrap();
        let b = begin_checkout(&cart, "USD").unwrap();
        assert_ne!(a.session_id, b.session_id);
    }

    #[test]
    fn test_summary_arithmetic() {
        let cart = cart_with(&[("p1", 10_000, 1)]);
        let summary = CartSummary::for_cart(&cart)
            .with_tax(2_100)
            .with_shipping(500)
            .with_discount(1_000);

        assert_eq!(summary.total(), 11_600);
        assert_eq!(summary.formatted_total(), "$116.00");
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(2499), "$24.99");
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(100), "$1.00");
        assert_eq!(format_cents(-51), "-$0.51");
    }

    #[test]
    fn test_session_serializes_camel_case() {
        let cart = cart_with(&[("p1", 100, 1)]);
        let session = begin_checkout(&cart, "USD").unwrap();
        let json = serde_json::to_value(&session).unwrap();
        assert!(json.get("sessionId").is_some());
        assert!(json.get("lineItems").is_some());
        assert!(json["lineItems"][0].get("unitPrice").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
