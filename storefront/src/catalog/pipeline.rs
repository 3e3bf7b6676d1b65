//! Filter/sort/paginate pipeline
//!
//! Pure and deterministic: narrow the catalog by the filter selection, order
//! it by the sort key, slice the requested page. No network or storage
//! access anywhere in this module.

use super::filter::FilterSelection;
use shared::models::Product;
use shared::query::{PaginatedResponse, SortKey};

/// One catalog listing request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub selection: FilterSelection,
    pub sort: SortKey,
    /// Requested page, 1-based; out-of-range values are clamped
    pub page: u32,
}

impl CatalogQuery {
    /// Query for page 1 of the full catalog in featured order
    pub fn all() -> Self {
        Self {
            selection: FilterSelection::new(),
            sort: SortKey::Featured,
            page: 1,
        }
    }

    pub fn with_selection(mut self, selection: FilterSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn order_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// Narrow the catalog to products passing the selection
pub fn filter_products(catalog: &[Product], selection: &FilterSelection) -> Vec<Product> {
    catalog
        .iter()
        .filter(|product| selection.matches(product))
        .cloned()
        .collect()
}

/// Order products by the sort key.
///
/// Sorts are stable, so catalog order breaks ties.
pub fn sort_products(products: &mut [Product], sort: SortKey) {
    match sort {
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::TopRated => {
            products.sort_by(|a, b| b.rating_or_zero().total_cmp(&a.rating_or_zero()))
        }
        SortKey::Newest => products.sort_by(|a, b| b.numeric_suffix().cmp(&a.numeric_suffix())),
        SortKey::Featured => products.sort_by(|a, b| a.id.cmp(&b.id)),
    }
}

/// Slice one page out of a result set.
///
/// Pages are 1-based. A request below 1 or past the last page clamps into
/// `1..=max(total_pages, 1)`; an empty result set yields an empty page 1
/// with total 0, never an error.
pub fn paginate(products: Vec<Product>, page: u32, page_size: usize) -> PaginatedResponse<Product> {
    let page_size = page_size.max(1);
    let total = products.len() as u64;
    let total_pages = products.len().div_ceil(page_size) as u32;
    let current = page.clamp(1, total_pages.max(1));

    let start = (current as usize - 1) * page_size;
    let data: Vec<Product> = products.into_iter().skip(start).take(page_size).collect();

    PaginatedResponse::new(data, total, current, page_size as u32)
}

/// Run the full pipeline for one listing request
pub fn run_query(
    catalog: &[Product],
    query: &CatalogQuery,
    page_size: usize,
) -> PaginatedResponse<Product> {
    let mut result = filter_products(catalog, &query.selection);
    sort_products(&mut result, query.sort);
    paginate(result, query.page, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_SIZE: usize = 12;

    fn product(id: &str, price: i64, rating: Option<f64>) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            description: None,
            price,
            original_price: None,
            discount: None,
            category: "Clothing".to_string(),
            subcategory: Some("T-Shirts".to_string()),
            image: String::new(),
            images: vec![],
            rating,
            review_count: None,
            colors: vec![],
            sizes: vec![],
            in_stock: true,
            is_new: false,
            is_best_seller: false,
            tags: vec![],
        }
    }

    /// 14 products, prices ascending with the id suffix
    fn catalog() -> Vec<Product> {
        (1..=14)
            .map(|i| product(&format!("p{i}"), i as i64 * 100, Some(i as f64 / 3.0)))
            .collect()
    }

    #[test]
    fn test_empty_selection_returns_full_catalog() {
        let result = filter_products(&catalog(), &FilterSelection::new());
        assert_eq!(result.len(), 14);
    }

    #[test]
    fn test_filter_by_category() {
        let mut catalog = catalog();
        catalog.push(Product {
            category: "Accessories".to_string(),
            subcategory: None,
            ..product("a1", 500, None)
        });

        let result = filter_products(&catalog, &FilterSelection::from_ids(["accessories"]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "a1");
    }

    #[test]
    fn test_price_sorts_are_exact_reverses() {
        let mut asc = catalog();
        sort_products(&mut asc, SortKey::PriceAsc);
        let mut desc = catalog();
        sort_products(&mut desc, SortKey::PriceDesc);

        let asc_ids: Vec<&str> = asc.iter().map(|p| p.id.as_str()).collect();
        let mut desc_ids: Vec<&str> = desc.iter().map(|p| p.id.as_str()).collect();
        desc_ids.reverse();
        assert_eq!(asc_ids, desc_ids);
        assert_eq!(asc_ids[0], "p1");
    }

    #[test]
    fn test_top_rated_treats_missing_rating_as_zero() {
        let mut products = vec![
            product("p1", 100, None),
            product("p2", 100, Some(4.8)),
            product("p3", 100, Some(2.1)),
        ];
        sort_products(&mut products, SortKey::TopRated);
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p2", "p3", "p1"]);
    }

    #[test]
    fn test_newest_sorts_by_descending_id_suffix() {
        let mut products = vec![
            product("p2", 100, None),
            product("p10", 100, None),
            product("p9", 100, None),
        ];
        sort_products(&mut products, SortKey::Newest);
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p10", "p9", "p2"]);
    }

    #[test]
    fn test_featured_is_lexicographic_id_order() {
        let mut products = vec![
            product("p3", 100, None),
            product("p1", 100, None),
            product("p10", 100, None),
        ];
        sort_products(&mut products, SortKey::Featured);
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        // lexicographic, not numeric: "p10" < "p3"
        assert_eq!(ids, ["p1", "p10", "p3"]);
    }

    #[test]
    fn test_pagination_of_14_products() {
        let page1 = paginate(catalog(), 1, PAGE_SIZE);
        assert_eq!(page1.data.len(), 12);
        assert_eq!(page1.total, 14);
        assert_eq!(page1.total_pages, 2);
        assert!(page1.has_next_page());

        let page2 = paginate(catalog(), 2, PAGE_SIZE);
        assert_eq!(page2.data.len(), 2);
        assert!(!page2.has_next_page());
        assert!(page2.has_previous_page());

        // out of range clamps to the last valid page
        let page3 = paginate(catalog(), 3, PAGE_SIZE);
        assert_eq!(page3.page, 2);
        assert_eq!(page3.data, page2.data);
    }

    #[test]
    fn test_pagination_clamps_low_pages_to_one() {
        let page = paginate(catalog(), 0, PAGE_SIZE);
        assert_eq!(page.page, 1);
        assert_eq!(page.data.len(), 12);
    }

    #[test]
    fn test_pagination_of_empty_result() {
        let page = paginate(Vec::new(), 5, PAGE_SIZE);
        assert_eq!(page.page, 1);
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_run_query_combines_stages() {
        let response = run_query(
            &catalog(),
            &CatalogQuery::all().order_by(SortKey::PriceDesc).page(2),
            PAGE_SIZE,
        );
        assert_eq!(response.data.len(), 2);
        // cheapest two land on the last page of the descending sort
        assert_eq!(response.data[0].id, "p2");
        assert_eq!(response.data[1].id, "p1");
    }
}
