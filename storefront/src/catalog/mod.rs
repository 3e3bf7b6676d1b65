//! Catalog - loading, category index, and the filter/sort/paginate pipeline
//!
//! The catalog is a static, read-only product list supplied by an external
//! data source. [`CatalogService`] validates it once, prebuilds the
//! [`CategoryIndex`], and answers listing queries through the pure pipeline
//! in [`pipeline`].

pub mod filter;
pub mod index;
pub mod loader;
pub mod pipeline;
pub mod service;

pub use filter::FilterSelection;
pub use index::CategoryIndex;
pub use loader::{load_catalog_file, parse_catalog, validate_catalog, CatalogError};
pub use pipeline::{filter_products, paginate, run_query, sort_products, CatalogQuery};
pub use service::CatalogService;
