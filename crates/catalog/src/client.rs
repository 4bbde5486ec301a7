//! Catalog HTTP client.
//!
//! The client performs a plain GET against the configured products endpoint.
//! There is deliberately no retry, no circuit breaker and no caching: each
//! chatbot request sees its own catalog snapshot, and a failed fetch degrades
//! to an empty catalog rather than an error surfaced to the user.

use crate::{CatalogConfig, CatalogError, CatalogResult, Product};

/// Client for the remote product-catalog service.
///
/// The inner `reqwest::Client` is constructed once and reused for connection
/// pooling only; no response data is retained between calls.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Creates a new client for the given configuration.
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetches the active-product listing.
    ///
    /// # Returns
    /// * `Ok(Vec<Product>)` - the parsed JSON array from the catalog
    /// * `Err(CatalogError)` - connection, status or decode failure
    pub async fn fetch_active(&self) -> CatalogResult<Vec<Product>> {
        let response = self
            .http
            .get(self.config.products_url())
            .send()
            .await
            .map_err(CatalogError::Request)?
            .error_for_status()
            .map_err(CatalogError::Status)?;

        response.json().await.map_err(CatalogError::Decode)
    }

    /// Fail-soft variant of [`fetch_active`](Self::fetch_active).
    ///
    /// On any failure the error is logged and an empty listing is returned,
    /// so callers never see a catalog outage as anything other than an empty
    /// catalog.
    pub async fn fetch_active_or_empty(&self) -> Vec<Product> {
        match self.fetch_active().await {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!("failed to fetch product catalog: {e}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Json, Router};

    // Serve a fixed listing from an ephemeral local port, same shape as the
    // real catalog endpoint.
    async fn spawn_stub_catalog() -> String {
        let app = Router::new().route(
            "/api/producto/active",
            get(|| async {
                Json(serde_json::json!([
                    {
                        "nombre": "Pollo a la Brasa Completo",
                        "descripcion": "Pollo entero con papas y ensalada",
                        "precio": 55.0,
                        "stock": 12,
                        "disponibilidadDescripcion": "Disponible",
                        "categoriaNombre": "Pollos",
                        "imagenUrl": "https://example.test/pollo.jpg",
                        "activo": true
                    },
                    {
                        "nombre": "Inca Kola",
                        "descripcion": "Gaseosa 500ml",
                        "precio": 5.0,
                        "stock": 40,
                        "disponibilidadDescripcion": "Disponible",
                        "categoriaNombre": "Bebidas",
                        "imagenUrl": "https://example.test/inca.jpg",
                        "activo": true
                    }
                ]))
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}/api/producto/active")
    }

    #[tokio::test]
    async fn fetches_and_parses_listing() {
        let url = spawn_stub_catalog().await;
        let client = CatalogClient::new(CatalogConfig::new(url).unwrap());

        let products = client.fetch_active().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].nombre, "Pollo a la Brasa Completo");
        assert_eq!(products[1].categoria_nombre, "Bebidas");
    }

    #[tokio::test]
    async fn unreachable_catalog_degrades_to_empty() {
        // Nothing listens on this port.
        let config = CatalogConfig::new("http://127.0.0.1:1/api/producto/active").unwrap();
        let client = CatalogClient::new(config);

        assert!(client.fetch_active().await.is_err());
        assert!(client.fetch_active_or_empty().await.is_empty());
    }
}
