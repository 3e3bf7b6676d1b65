//! Filter selection
//!
//! The set of selected category/subcategory identifiers driving the catalog
//! filter. Category refinement is mutually exclusive in both directions:
//! selecting a category deselects all of its subcategories, and selecting a
//! subcategory deselects its parent category.

use super::index::CategoryIndex;
use shared::models::Product;

/// Selected category/subcategory identifiers, in selection order
///
/// Entries are either category slugs ("clothing") or composite subcategory
/// identifiers ("clothing-t-shirts").
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    selected: Vec<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from pre-resolved identifiers (e.g. URL parameters)
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for id in ids {
            let id = id.into();
            if !selection.contains(&id) {
                selection.selected.push(id);
            }
        }
        selection
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Selected identifiers, in selection order
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Toggle a category on or off.
    ///
    /// Selecting a category first deselects any of its subcategories that
    /// were individually selected; the index supplies the subcategory list.
    pub fn toggle_category(&mut self, index: &CategoryIndex, category_id: &str) {
        if let Some(category) = index.get(category_id) {
            let composites: Vec<String> = category
                .items
                .iter()
                .map(|sub| category.composite_id(&sub.id))
                .collect();
            self.selected.retain(|id| !composites.contains(id));
        }

        match self.selected.iter().position(|id| id == category_id) {
            Some(pos) => {
                self.selected.remove(pos);
            }
            None => self.selected.push(category_id.to_string()),
        }
    }

    /// Toggle a subcategory on or off.
    ///
    /// Selecting a subcategory deselects its parent category, mirroring the
    /// category toggle.
    pub fn toggle_subcategory(&mut self, category_id: &str, subcategory_id: &str) {
        let composite = format!("{category_id}-{subcategory_id}");
        match self.selected.iter().position(|id| *id == composite) {
            Some(pos) => {
                self.selected.remove(pos);
            }
            None => {
                self.selected.retain(|id| id != category_id);
                self.selected.push(composite);
            }
        }
    }

    /// Deselect a single identifier (active-filter chip dismissal)
    pub fn deselect(&mut self, id: &str) {
        self.selected.retain(|s| s != id);
    }

    /// Deselect everything
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Whether a product passes the filter.
    ///
    /// An empty selection passes everything; otherwise the product's
    /// category slug or its composite subcategory identifier must be
    /// selected.
    pub fn matches(&self, product: &Product) -> bool {
        if self.selected.is_empty() {
            return true;
        }
        if self.contains(&product.category_slug()) {
            return true;
        }
        if let Some(composite) = product.subcategory_id() {
            return self.contains(&composite);
        }
        false
    }
}
