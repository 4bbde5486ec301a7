//! Catalog runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! client. The intent is to avoid reading process-wide environment variables
//! during request handling, which can lead to inconsistent behaviour in
//! multi-threaded runtimes and test harnesses.

use crate::{CatalogError, CatalogResult};

/// Endpoint serving the active-product listing as a JSON array.
pub const DEFAULT_PRODUCTS_URL: &str = "https://riccospyp.somee.com/api/producto/active";

/// Catalog configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    products_url: String,
}

impl CatalogConfig {
    /// Create a new `CatalogConfig` pointing at the given products endpoint.
    pub fn new(products_url: impl Into<String>) -> CatalogResult<Self> {
        let products_url = products_url.into();
        if products_url.trim().is_empty() {
            return Err(CatalogError::EmptyUrl);
        }

        Ok(Self { products_url })
    }

    /// Resolve the configuration from an optional environment value.
    ///
    /// If `value` is `None` or empty/whitespace, the default endpoint is used.
    pub fn from_env_value(value: Option<String>) -> Self {
        let url = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PRODUCTS_URL.to_string());

        Self { products_url: url }
    }

    pub fn products_url(&self) -> &str {
        &self.products_url
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::from_env_value(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_url() {
        assert!(matches!(CatalogConfig::new("  "), Err(CatalogError::EmptyUrl)));
    }

    #[test]
    fn env_value_falls_back_to_default() {
        assert_eq!(
            CatalogConfig::from_env_value(None).products_url(),
            DEFAULT_PRODUCTS_URL
        );
        assert_eq!(
            CatalogConfig::from_env_value(Some("  ".into())).products_url(),
            DEFAULT_PRODUCTS_URL
        );
        assert_eq!(
            CatalogConfig::from_env_value(Some("http://localhost:9/x".into())).products_url(),
            "http://localhost:9/x"
        );
    }
}
