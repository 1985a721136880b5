//! PokeAPI client.
//!
//! PokeAPI is unauthenticated and serves JSON over plain GETs. List
//! endpoints return `{ count, next, previous, results }` where `next` and
//! `previous` are absolute URLs or null.

use std::time::{Duration, Instant};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{CatalogItem, CatalogItemDetail, CatalogPage, Category, CategoryMember};
use super::{CatalogApi, CatalogError};
use crate::metrics::{CATALOG_REQUESTS, CATALOG_REQUEST_DURATION};

/// PokeAPI client configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PokeApiConfig {
    /// Base URL (default: https://pokeapi.co/api/v2).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. 0 disables the timeout.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User-Agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("Pokedex/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// PokeAPI client.
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a new PokeAPI client.
    pub fn new(config: PokeApiConfig) -> Result<Self, CatalogError> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let start = Instant::now();
        let result = self.send_and_parse(url, query).await;

        CATALOG_REQUEST_DURATION
            .with_label_values(&[operation])
            .observe(start.elapsed().as_secs_f64());
        CATALOG_REQUESTS
            .with_label_values(&[operation, if result.is_ok() { "success" } else { "error" }])
            .inc();

        result
    }

    async fn send_and_parse<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if status == 404 {
            return Err(CatalogError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::ParseError(format!("{}: {}", url, e)))
    }
}

#[async_trait::async_trait]
impl CatalogApi for PokeApiClient {
    async fn list_categories(&self, limit: u32) -> Result<Vec<Category>, CatalogError> {
        let url = format!("{}/type", self.base_url);

        debug!(limit, "PokeAPI list types");

        let list: NamedResourceList = self
            .get_json("list_categories", &url, &[("limit", limit.to_string())])
            .await?;

        Ok(list
            .results
            .into_iter()
            .map(|r| Category::new(r.name, r.url))
            .collect())
    }

    async fn list_catalog_page(
        &self,
        offset: u32,
        limit: u32,
    ) -> Result<CatalogPage, CatalogError> {
        let url = format!("{}/pokemon", self.base_url);

        debug!(offset, limit, "PokeAPI list pokemon");

        let list: NamedResourceList = self
            .get_json(
                "list_catalog_page",
                &url,
                &[("offset", offset.to_string()), ("limit", limit.to_string())],
            )
            .await?;

        Ok(list.into())
    }

    async fn list_members_of_category(
        &self,
        name: &str,
    ) -> Result<Vec<CategoryMember>, CatalogError> {
        let url = format!("{}/type/{}", self.base_url, urlencoding::encode(name));

        debug!(category = %name, "PokeAPI list pokemon by type");

        let response: TypeResponse = self.get_json("list_members_of_category", &url, &[]).await?;

        Ok(response.pokemon.into_iter().map(|p| p.into()).collect())
    }

    async fn fetch_detail(&self, reference: &str) -> Result<CatalogItemDetail, CatalogError> {
        debug!(reference = %reference, "PokeAPI get pokemon");

        let response: PokemonResponse = self.get_json("fetch_detail", reference, &[]).await?;

        Ok(response.into())
    }
}

// ============================================================================
// PokeAPI Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct NamedResourceList {
    #[serde(default)]
    count: u32,
    next: Option<String>,
    previous: Option<String>,
    #[serde(default)]
    results: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
struct TypeResponse {
    #[serde(default)]
    pokemon: Vec<TypePokemon>,
}

#[derive(Debug, Deserialize)]
struct TypePokemon {
    pokemon: NamedResource,
    slot: u32,
}

#[derive(Debug, Deserialize)]
struct PokemonResponse {
    id: u32,
    name: String,
    height: Option<u32>,
    weight: Option<u32>,
    base_experience: Option<u32>,
    #[serde(default)]
    types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    sprites: Sprites,
}

#[derive(Debug, Deserialize)]
struct PokemonTypeSlot {
    slot: u32,
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Default, Deserialize)]
struct Sprites {
    front_default: Option<String>,
}

// ============================================================================
// Conversions
// ============================================================================

impl From<NamedResourceList> for CatalogPage {
    fn from(list: NamedResourceList) -> Self {
        Self {
            results: list
                .results
                .into_iter()
                .map(|r| CatalogItem::new(r.name, r.url))
                .collect(),
            total_count: list.count,
            has_previous: list.previous.is_some(),
            has_next: list.next.is_some(),
        }
    }
}

impl From<TypePokemon> for CategoryMember {
    fn from(p: TypePokemon) -> Self {
        Self {
            item: CatalogItem::new(p.pokemon.name, p.pokemon.url),
            slot: p.slot,
        }
    }
}

impl From<PokemonResponse> for CatalogItemDetail {
    fn from(mut p: PokemonResponse) -> Self {
        p.types.sort_by_key(|t| t.slot);
        Self {
            id: p.id,
            name: p.name,
            categories: p.types.into_iter().map(|t| t.kind.name).collect(),
            image_reference: p.sprites.front_default,
            height: p.height,
            weight: p.weight,
            base_experience: p.base_experience,
        }
    }
}
