//! Catalog Service - validated product list with a prebuilt category index
//!
//! Cheap to clone; all clones share the same catalog snapshot. The catalog
//! is immutable after construction.

use super::index::CategoryIndex;
use super::loader::{validate_catalog, CatalogError};
use super::pipeline::{run_query, CatalogQuery};
use shared::models::Product;
use shared::query::PaginatedResponse;
use std::sync::Arc;
use std::time::Duration;

/// Read-only catalog with listing queries
#[derive(Clone)]
pub struct CatalogService {
    products: Arc<Vec<Product>>,
    index: Arc<CategoryIndex>,
    page_size: usize,
    query_delay: Duration,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("products", &self.products.len())
            .field("categories", &self.index.len())
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl CatalogService {
    /// Validate the catalog and build the category index
    pub fn new(products: Vec<Product>, page_size: usize) -> Result<Self, CatalogError> {
        validate_catalog(&products)?;
        let index = CategoryIndex::build(&products);
        tracing::info!(
            products = products.len(),
            categories = index.len(),
            "catalog loaded"
        );

        Ok(Self {
            products: Arc::new(products),
            index: Arc::new(index),
            page_size,
            query_delay: Duration::ZERO,
        })
    }

    /// Set the cosmetic delay applied by [`CatalogService::query_delayed`]
    pub fn with_query_delay(mut self, delay: Duration) -> Self {
        self.query_delay = delay;
        self
    }

    /// The full catalog, in supplied order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up one product by id
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The category filter tree
    pub fn index(&self) -> &CategoryIndex {
        &self.index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Run a listing query against the catalog
    pub fn query(&self, query: &CatalogQuery) -> PaginatedResponse<Product> {
        run_query(&self.products, query, self.page_size)
    }

    /// Run a listing query after the configured delay.
    ///
    /// The delay exists so a UI can show its loading placeholder; it carries
    /// no cancellation semantics. A second query issued while a delay is
    /// pending simply supersedes the earlier result, since state is read
    /// fresh on every call.
    pub async fn query_delayed(&self, query: &CatalogQuery) -> PaginatedResponse<Product> {
        if !self.query_delay.is_zero() {
            tokio::time::sleep(self.query_delay).await;
        }
        self.query(query)
    }
}
