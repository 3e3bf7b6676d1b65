//! Category Model

use serde::{Deserialize, Serialize};

/// Category entry in the filter tree
///
/// Derived from the flat product list; `id` is the slug of the display name
/// and `count` is the number of catalog products in the category (including
/// all subcategories).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryNode {
    pub id: String,
    pub name: String,
    pub count: u32,
    /// Subcategories, sorted by display name
    #[serde(default)]
    pub items: Vec<SubcategoryNode>,
}

/// Subcategory entry within a category
///
/// `id` is the subcategory's own slug; the composite identifier used in
/// filter selections is `"{category_id}-{id}"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubcategoryNode {
    pub id: String,
    pub name: String,
    pub count: u32,
}

impl CategoryNode {
    /// Composite selection identifier for one of this category's subcategories
    pub fn composite_id(&self, subcategory_id: &str) -> String {
        format!("{}-{}", self.id, subcategory_id)
    }
}
