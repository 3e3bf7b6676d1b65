//! StyleHub Storefront Engine
//!
//! Headless core of a client-rendered e-commerce storefront: catalog
//! filtering, sorting and pagination, a category index for filter UIs, and a
//! shopping cart persisted to an embedded local store. Checkout is a handoff
//! to an external payment provider; nothing past the handoff payload lives
//! here.
//!
//! # Module structure
//!
//! ```text
//! storefront/src/
//! ├── core/          # configuration, state wiring, logging
//! ├── catalog/       # loader, category index, filter/sort/paginate pipeline
//! ├── cart/          # cart store and redb-backed persistence
//! └── checkout/      # cart summary and checkout session handoff
//! ```
//!
//! The host application builds a [`StorefrontState`] once at startup and
//! passes it down to every consumer; there are no module-level singletons.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod core;

// Re-export public types
pub use cart::{CartStorage, CartStore, StorageError};
pub use catalog::{
    CatalogError, CatalogQuery, CatalogService, CategoryIndex, FilterSelection,
};
pub use checkout::{begin_checkout, CartSummary, CheckoutError, CheckoutSession};
pub use core::{Config, InitError, StorefrontState};

/// Prepare the process environment: load `.env` and initialize logging.
///
/// Call once at host startup, before [`core::Config::from_env`], so that
/// variables from a `.env` file are visible to configuration loading. The
/// log level comes from `LOG_LEVEL` (default `info`); `RUST_LOG` overrides
/// both when set.
pub fn setup_environment() {
    dotenv::dotenv().ok();
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    crate::core::logger::init_logger(&level);
}
