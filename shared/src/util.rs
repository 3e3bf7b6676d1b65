/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Derive a URL-safe identifier from a display name.
///
/// Lowercases the name and collapses runs of whitespace into single dashes:
/// `"Winter Jackets"` → `"winter-jackets"`. Category and subcategory
/// identifiers throughout the storefront are slugs of their display names.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Clothing"), "clothing");
        assert_eq!(slugify("T-Shirts"), "t-shirts");
        assert_eq!(slugify("  Winter   Jackets "), "winter-jackets");
        assert_eq!(slugify(""), "");
    }
}
