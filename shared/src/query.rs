//! Catalog query types
//!
//! Sort keys and the paginated list response shared between the engine and
//! its consumers.

use serde::{Deserialize, Serialize};

/// Sort order for catalog listings
///
/// Serializes with the kebab-case names used in URL query parameters
/// ("price-asc", "top-rated", ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Curated default order (ascending product id)
    #[default]
    Featured,
    /// Price: low to high
    PriceAsc,
    /// Price: high to low
    PriceDesc,
    /// Rating, best first (missing rating sorts last)
    TopRated,
    /// Newest arrivals first (descending numeric id suffix)
    Newest,
}

impl SortKey {
    /// Parse a sort key from a URL parameter string.
    ///
    /// Unknown or missing values fall back to [`SortKey::Featured`], the
    /// listing default.
    pub fn from_param(s: &str) -> Self {
        match s {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "top-rated" => Self::TopRated,
            "newest" => Self::Newest,
            _ => Self::Featured,
        }
    }

    /// The URL parameter string for this sort key
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::TopRated => "top-rated",
            Self::Newest => "newest",
        }
    }
}

/// Paginated list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Page of records
    pub data: Vec<T>,
    /// Total record count before pagination
    pub total: u64,
    /// Current page number (1-based)
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Total page count
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit > 0 {
            total.div_ceil(u64::from(limit)) as u32
        } else {
            1
        };

        Self {
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }
}
