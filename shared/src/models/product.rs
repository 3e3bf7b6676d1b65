//! Product Model

use crate::util::slugify;
use serde::{Deserialize, Serialize};

/// Catalog product entity
///
/// Supplied externally as a static, read-only JSON array. Prices are integer
/// minor currency units (cents).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in cents
    pub price: i64,
    /// Pre-discount price in cents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    /// Discount in percentage (e.g., 29 = 29% off)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
    /// Category display name (e.g., "Clothing")
    pub category: String,
    /// Subcategory display name (e.g., "T-Shirts")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Primary image URL
    pub image: String,
    /// Gallery image URLs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Average rating, 0.0-5.0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    /// Hex color codes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_new: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_best_seller: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Product {
    /// Slug identifier of the category ("Clothing" → "clothing")
    pub fn category_slug(&self) -> String {
        slugify(&self.category)
    }

    /// Composite identifier of the subcategory, if any.
    ///
    /// Formed by joining the category slug and the subcategory slug:
    /// "Clothing" / "T-Shirts" → "clothing-t-shirts".
    pub fn subcategory_id(&self) -> Option<String> {
        self.subcategory
            .as_deref()
            .map(|sub| format!("{}-{}", self.category_slug(), slugify(sub)))
    }

    /// Trailing numeric suffix of the product id ("p12" → 12).
    ///
    /// Ids encode creation order monotonically, so the suffix doubles as a
    /// recency proxy for the newest-first sort. Ids without a numeric
    /// suffix sort as 0.
    pub fn numeric_suffix(&self) -> u64 {
        let digits: String = self
            .id
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_digit())
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        digits.parse().unwrap_or(0)
    }

    /// Rating with missing treated as zero (sorting rule)
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}
