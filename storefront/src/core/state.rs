//! Storefront state - explicit wiring of the engine's services
//!
//! The host builds one [`StorefrontState`] at startup and passes it down;
//! services are plain constructed values (no module-level singletons), and
//! the cart's lifecycle — open storage, rehydrate — happens here, visibly.

use crate::cart::{CartStorage, CartStore, StorageError};
use crate::catalog::{CatalogError, CatalogService};
use crate::core::Config;
use shared::models::Product;
use thiserror::Error;

/// Initialization failures
///
/// Only construction is fatal: without a database handle there is nothing to
/// persist to later, and a bad catalog is a deployment fault. Everything
/// after a successful initialize degrades instead of failing.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to prepare work directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("failed to open cart storage: {0}")]
    Storage(#[from] StorageError),
}

/// Assembled storefront engine
///
/// Cheap to clone; clones share the same cart state and catalog snapshot.
#[derive(Debug, Clone)]
pub struct StorefrontState {
    pub config: Config,
    pub catalog: CatalogService,
    pub cart: CartStore,
}

impl StorefrontState {
    /// Build the engine: validate the catalog, open the cart database under
    /// the work directory, rehydrate the cart store.
    pub fn initialize(config: &Config, products: Vec<Product>) -> Result<Self, InitError> {
        std::fs::create_dir_all(&config.work_dir)?;

        let catalog =
            CatalogService::new(products, config.page_size)?.with_query_delay(config.query_delay());

        let storage = CartStorage::open(config.cart_db_path())?;
        let cart = CartStore::open(storage, config.cart_storage_key.clone());

        tracing::info!(work_dir = %config.work_dir, "storefront initialized");

        Ok(Self {
            config: config.clone(),
            catalog,
            cart,
        })
    }
}
