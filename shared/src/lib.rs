//! Shared types for the StyleHub storefront
//!
//! Domain models, sort and pagination types, and utility functions used by
//! the storefront engine and its consumers.

pub mod models;
pub mod query;
pub mod util;

// Re-exports
pub use models::{CartLineItem, CategoryNode, Product, SubcategoryNode};
pub use query::{PaginatedResponse, SortKey};
pub use serde::{Deserialize, Serialize};
