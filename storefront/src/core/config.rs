use std::path::PathBuf;
use std::time::Duration;

/// Storefront configuration
///
/// # Environment variables
///
/// All values can be overridden through environment variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/stylehub | working directory (cart database lives here) |
/// | CART_STORAGE_KEY | stylehub_cart | key of the single persisted cart entry |
/// | PAGE_SIZE | 12 | catalog page size |
/// | QUERY_DELAY_MS | 300 | cosmetic catalog loading delay (milliseconds) |
/// | CURRENCY | USD | checkout currency code |
/// | ENVIRONMENT | development | development \| staging \| production |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory, stores the cart database
    pub work_dir: String,
    /// Key of the persisted cart entry
    pub cart_storage_key: String,
    /// Products per catalog page
    pub page_size: usize,
    /// Artificial delay before delayed catalog queries resolve
    pub query_delay_ms: u64,
    /// Currency code handed to the checkout provider
    pub currency: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/stylehub".into()),
            cart_storage_key: std::env::var("CART_STORAGE_KEY")
                .unwrap_or_else(|_| "stylehub_cart".into()),
            page_size: std::env::var("PAGE_SIZE")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(12),
            query_delay_ms: std::env::var("QUERY_DELAY_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(300),
            currency: std::env::var("CURRENCY").unwrap_or_else(|_| "USD".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the work directory (and disable the query delay)
    ///
    /// Used by tests that point the engine at a temporary directory.
    pub fn with_overrides(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.query_delay_ms = 0;
        config
    }

    /// Path of the cart database file
    pub fn cart_db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("cart.redb")
    }

    /// The cosmetic query delay as a [`Duration`]
    pub fn query_delay(&self) -> Duration {
        Duration::from_millis(self.query_delay_ms)
    }

    /// Whether running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether running in development
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::with_overrides("/tmp/stylehub-test");
        assert_eq!(config.cart_storage_key, "stylehub_cart");
        assert_eq!(config.page_size, 12);
        assert_eq!(config.currency, "USD");
        assert!(config.is_development());
        assert!(!config.is_production());
    }

    #[test]
    fn test_cart_db_path() {
        let config = Config::with_overrides("/data/shop");
        assert_eq!(config.cart_db_path(), PathBuf::from("/data/shop/cart.redb"));
    }

    #[test]
    fn test_overrides_disable_query_delay() {
        let config = Config::with_overrides("/tmp/x");
        assert_eq!(config.query_delay(), Duration::ZERO);
    }
}
