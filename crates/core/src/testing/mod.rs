//! Testing utilities and mock implementations.
//!
//! This module provides a mock implementation of the catalog API trait,
//! allowing engine and server tests to run without network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use pokedex_core::testing::{MockCatalogApi, fixtures};
//!
//! let api = MockCatalogApi::new();
//! api.set_categories(vec![fixtures::category("fire")]).await;
//! api.set_catalog(fixtures::pokemon_range(1, 45)).await;
//!
//! // Use in CatalogQueryEngine...
//! ```

mod mock_catalog_api;

pub use mock_catalog_api::{MockCatalogApi, RecordedCatalogQuery};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::{CatalogItem, CatalogItemDetail, Category};

    /// Base URL the fixtures pretend to come from.
    pub const BASE_URL: &str = "https://pokeapi.test/api/v2";

    /// Detail reference for a Pokémon id.
    pub fn detail_reference(id: u32) -> String {
        format!("{}/pokemon/{}/", BASE_URL, id)
    }

    /// Create an unselected category.
    pub fn category(name: &str) -> Category {
        Category::new(name, format!("{}/type/{}/", BASE_URL, name))
    }

    /// Create a Pokémon detail record with reasonable defaults.
    pub fn pokemon(id: u32, name: &str, types: &[&str]) -> CatalogItemDetail {
        CatalogItemDetail {
            id,
            name: name.to_string(),
            categories: types.iter().map(|t| t.to_string()).collect(),
            image_reference: Some(format!("https://sprites.test/{}.png", id)),
            height: Some(7),
            weight: Some(69),
            base_experience: Some(64),
        }
    }

    /// Pokémon `first..=last`, all normal type.
    pub fn pokemon_range(first: u32, last: u32) -> Vec<CatalogItemDetail> {
        (first..=last)
            .map(|id| pokemon(id, &format!("pokemon-{}", id), &["normal"]))
            .collect()
    }

    /// List entry pointing at a detail record.
    pub fn item(detail: &CatalogItemDetail) -> CatalogItem {
        CatalogItem::new(detail.name.clone(), detail_reference(detail.id))
    }
}
