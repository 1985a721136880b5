//! Browse configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the query engine and the browse view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowseConfig {
    /// Heading shown above the list.
    #[serde(default = "default_title")]
    pub title: String,
    /// Pokémon per page (default: 20).
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
    /// How many types to request for the filter list (default: 30).
    #[serde(default = "default_type_limit")]
    pub type_limit: u32,
    /// Image shown for Pokémon without a sprite.
    #[serde(default = "default_fallback_image")]
    pub fallback_image: String,
    /// Max detail fetches in flight per cycle (default: 20).
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,
}

fn default_title() -> String {
    "These are our products".to_string()
}

fn default_page_limit() -> u32 {
    20
}

fn default_type_limit() -> u32 {
    30
}

fn default_fallback_image() -> String {
    "/pokemon_default.png".to_string()
}

fn default_max_concurrent_fetches() -> usize {
    20
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            page_limit: default_page_limit(),
            type_limit: default_type_limit(),
            fallback_image: default_fallback_image(),
            max_concurrent_fetches: default_max_concurrent_fetches(),
        }
    }
}
