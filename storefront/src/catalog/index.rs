//! Category index builder
//!
//! Derives the category → subcategory tree with item counts from the flat
//! product list, for rendering filter checkboxes and resolving display
//! names of selected filter entries. Built once per catalog snapshot.

use shared::models::{CategoryNode, Product, SubcategoryNode};
use shared::util::slugify;

/// Category tree with item counts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryIndex {
    categories: Vec<CategoryNode>,
}

impl CategoryIndex {
    /// Build the index from a product list.
    ///
    /// Each product increments its category's count and, when present, its
    /// subcategory's (the subcategory entry is created on first encounter).
    /// Categories and the subcategories within each are then sorted by
    /// display name.
    pub fn build(products: &[Product]) -> Self {
        let mut categories: Vec<CategoryNode> = Vec::new();

        for product in products {
            let slug = product.category_slug();
            let pos = match categories.iter().position(|c| c.id == slug) {
                Some(pos) => pos,
                None => {
                    categories.push(CategoryNode {
                        id: slug,
                        name: product.category.clone(),
                        count: 0,
                        items: Vec::new(),
                    });
                    categories.len() - 1
                }
            };
            let category = &mut categories[pos];
            category.count += 1;

            if let Some(sub) = &product.subcategory {
                let sub_slug = slugify(sub);
                match category.items.iter_mut().find(|s| s.id == sub_slug) {
                    Some(entry) => entry.count += 1,
                    None => category.items.push(SubcategoryNode {
                        id: sub_slug,
                        name: sub.clone(),
                        count: 1,
                    }),
                }
            }
        }

        for category in &mut categories {
            category.items.sort_by(|a, b| a.name.cmp(&b.name));
        }
        categories.sort_by(|a, b| a.name.cmp(&b.name));

        Self { categories }
    }

    /// All categories, sorted by display name
    pub fn categories(&self) -> &[CategoryNode] {
        &self.categories
    }

    /// Look up a category by its slug
    pub fn get(&self, category_id: &str) -> Option<&CategoryNode> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Resolve the display name for a selection identifier.
    ///
    /// A plain category id resolves to the category name; a composite
    /// subcategory id resolves to `"Category > Subcategory"`. Unknown
    /// identifiers resolve to `None`. Used for active-filter chips.
    pub fn display_name(&self, selection_id: &str) -> Option<String> {
        for category in &self.categories {
            if category.id == selection_id {
                return Some(category.name.clone());
            }
            if let Some(sub_id) = selection_id.strip_prefix(&format!("{}-", category.id))
                && let Some(sub) = category.items.iter().find(|s| s.id == sub_id)
            {
                return Some(format!("{} > {}", category.name, sub.name));
            }
        }
        None
    }
}
