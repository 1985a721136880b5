//! Catalog API integration.
//!
//! The engine talks to the remote Pokémon catalog exclusively through the
//! [`CatalogApi`] trait. [`PokeApiClient`] is the HTTP implementation;
//! `testing::MockCatalogApi` is the in-memory one.

mod pokeapi;
mod types;

pub use pokeapi::{PokeApiClient, PokeApiConfig};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to the catalog.
///
/// The engine does not act on the variant; it is kept for diagnostics.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Read access to the remote Pokémon catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// List up to `limit` Pokémon types.
    async fn list_categories(&self, limit: u32) -> Result<Vec<Category>, CatalogError>;

    /// Fetch one page of the unfiltered catalog.
    async fn list_catalog_page(&self, offset: u32, limit: u32)
        -> Result<CatalogPage, CatalogError>;

    /// List every Pokémon that has the given type.
    async fn list_members_of_category(
        &self,
        name: &str,
    ) -> Result<Vec<CategoryMember>, CatalogError>;

    /// Fetch the full record behind a detail reference.
    async fn fetch_detail(&self, reference: &str) -> Result<CatalogItemDetail, CatalogError>;
}
