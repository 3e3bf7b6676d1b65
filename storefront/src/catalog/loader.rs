//! Catalog input loading and validation
//!
//! The catalog arrives as a JSON array of products (camelCase fields). A bad
//! catalog is a deployment fault, so violations are typed errors at load
//! time rather than runtime conditions.

use shared::models::Product;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Catalog input errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate product id: {0}")]
    DuplicateId(String),

    #[error("negative price for product {id}: {price}")]
    NegativePrice { id: String, price: i64 },
}

/// Check catalog invariants: unique ids, non-negative prices
pub fn validate_catalog(products: &[Product]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for product in products {
        if !seen.insert(product.id.as_str()) {
            return Err(CatalogError::DuplicateId(product.id.clone()));
        }
        if product.price < 0 {
            return Err(CatalogError::NegativePrice {
                id: product.id.clone(),
                price: product.price,
            });
        }
        if let Some(original) = product.original_price
            && original < 0
        {
            return Err(CatalogError::NegativePrice {
                id: product.id.clone(),
                price: original,
            });
        }
    }
    Ok(())
}

/// Parse and validate a catalog from a JSON string
pub fn parse_catalog(json: &str) -> Result<Vec<Product>, CatalogError> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    validate_catalog(&products)?;
    Ok(products)
}

/// Read, parse, and validate a catalog file
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Vec<Product>, CatalogError> {
    let json = std::fs::read_to_string(path)?;
    parse_catalog(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        {
            "id": "p1",
            "name": "Premium Cotton T-Shirt 6-Pack",
            "price": 2499,
            "originalPrice": 3499,
            "discount": 29,
            "category": "Clothing",
            "subcategory": "T-Shirts",
            "image": "https://example.com/p1.jpg",
            "rating": 4.8,
            "reviewCount": 1242,
            "inStock": true
        },
        {
            "id": "p3",
            "name": "Slim Fit Stretch Jeans",
            "price": 3299,
            "category": "Clothing",
            "subcategory": "Pants",
            "image": "https://example.com/p3.jpg",
            "inStock": true
        }
    ]"#;

    #[test]
    fn test_parse_catalog() {
        let products = parse_catalog(CATALOG).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].price, 2499);
        assert_eq!(products[1].subcategory.as_deref(), Some("Pants"));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            parse_catalog("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut products = parse_catalog(CATALOG).unwrap();
        products[1].id = "p1".to_string();
        assert!(matches!(
            validate_catalog(&products),
            Err(CatalogError::DuplicateId(id)) if id == "p1"
        ));
    }

    #[test]
    fn test_validate_rejects_negative_prices() {
        let mut products = parse_catalog(CATALOG).unwrap();
        products[0].price = -1;
        assert!(matches!(
            validate_catalog(&products),
            Err(CatalogError::NegativePrice { price: -1, .. })
        ));
    }
}
