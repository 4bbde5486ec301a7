//! # Mercabot Catalog
//!
//! Remote product-catalog access for the chatbot.
//!
//! This crate owns the outbound HTTP side of the system:
//! - The `Product` wire model returned by the catalog service
//! - Startup-resolved catalog configuration (`CatalogConfig`)
//! - `CatalogClient`, a thin GET-and-parse client with a fail-soft wrapper
//!
//! **No chatbot concerns**: tokenization and intent dispatch belong in
//! `mercabot-nlp` and `mercabot-core`.

pub mod client;
pub mod config;
pub mod product;

pub use client::CatalogClient;
pub use config::CatalogConfig;
pub use product::Product;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog URL cannot be empty")]
    EmptyUrl,
    #[error("failed to reach catalog service: {0}")]
    Request(reqwest::Error),
    #[error("catalog service returned an error status: {0}")]
    Status(reqwest::Error),
    #[error("failed to decode catalog response: {0}")]
    Decode(reqwest::Error),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
