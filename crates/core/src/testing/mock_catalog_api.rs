//! Mock catalog API for testing.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::catalog::{
    CatalogApi, CatalogError, CatalogItem, CatalogItemDetail, CatalogPage, Category,
    CategoryMember,
};

use super::fixtures;

/// A recorded catalog query for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCatalogQuery {
    ListCategories { limit: u32 },
    ListCatalogPage { offset: u32, limit: u32 },
    ListMembersOfCategory { name: String },
    FetchDetail { reference: String },
}

/// Mock implementation of the CatalogApi trait.
///
/// Provides controllable behavior for testing:
/// - Serve a configurable catalog, derived type memberships and details
/// - Track queries for assertions
/// - Simulate failures, globally (next call) or per detail reference
/// - Delay individual detail responses to force out-of-order completion
///
/// # Example
///
/// ```rust,ignore
/// use pokedex_core::testing::{MockCatalogApi, fixtures};
///
/// let api = MockCatalogApi::new();
/// api.add_pokemon(fixtures::pokemon(6, "charizard", &["fire", "flying"])).await;
///
/// let fire = api.list_members_of_category("fire").await?;
/// assert_eq!(fire.len(), 1);
/// ```
#[derive(Debug)]
pub struct MockCatalogApi {
    /// Category list returned by `list_categories`.
    categories: Arc<RwLock<Vec<Category>>>,
    /// Unfiltered catalog, in upstream order.
    catalog: Arc<RwLock<Vec<CatalogItemDetail>>>,
    /// Explicit membership lists. Types without an entry are derived from the catalog.
    members: Arc<RwLock<HashMap<String, Vec<CatalogItem>>>>,
    /// Upstream `(previous, next)` cursor presence, replacing the computed flags.
    page_cursors: Arc<RwLock<Option<(bool, bool)>>>,
    /// Per-reference response delays.
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    /// References whose detail fetch always fails.
    failing_references: Arc<RwLock<HashSet<String>>>,
    /// Recorded queries.
    queries: Arc<RwLock<Vec<RecordedCatalogQuery>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<CatalogError>>>,
}

impl Default for MockCatalogApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalogApi {
    /// Create a new empty mock catalog.
    pub fn new() -> Self {
        Self {
            categories: Arc::new(RwLock::new(Vec::new())),
            catalog: Arc::new(RwLock::new(Vec::new())),
            members: Arc::new(RwLock::new(HashMap::new())),
            page_cursors: Arc::new(RwLock::new(None)),
            delays: Arc::new(RwLock::new(HashMap::new())),
            failing_references: Arc::new(RwLock::new(HashSet::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    // =========================================================================
    // Catalog Configuration
    // =========================================================================

    /// Set the category list.
    pub async fn set_categories(&self, categories: Vec<Category>) {
        *self.categories.write().await = categories;
    }

    /// Append a Pokémon to the catalog.
    pub async fn add_pokemon(&self, detail: CatalogItemDetail) {
        self.catalog.write().await.push(detail);
    }

    /// Replace the whole catalog.
    pub async fn set_catalog(&self, catalog: Vec<CatalogItemDetail>) {
        *self.catalog.write().await = catalog;
    }

    /// Override the membership list of a type, including its order.
    pub async fn set_members(&self, category: &str, items: Vec<CatalogItem>) {
        self.members
            .write()
            .await
            .insert(category.to_string(), items);
    }

    /// Report the given cursor presence on every catalog page regardless of
    /// offset, the way an inconsistent upstream might.
    pub async fn set_page_cursors(&self, has_previous: bool, has_next: bool) {
        *self.page_cursors.write().await = Some((has_previous, has_next));
    }

    // =========================================================================
    // Timing and Failures
    // =========================================================================

    /// Delay the detail response for one reference.
    pub async fn set_detail_delay(&self, reference: &str, delay: Duration) {
        self.delays
            .write()
            .await
            .insert(reference.to_string(), delay);
    }

    /// Make every detail fetch for this reference fail.
    pub async fn fail_detail(&self, reference: &str) {
        self.failing_references
            .write()
            .await
            .insert(reference.to_string());
    }

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    /// Clear any pending error and failing references.
    pub async fn clear_errors(&self) {
        *self.next_error.write().await = None;
        self.failing_references.write().await.clear();
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<CatalogError> {
        self.next_error.write().await.take()
    }

    // =========================================================================
    // Query Recording
    // =========================================================================

    /// Get all recorded queries.
    pub async fn recorded_queries(&self) -> Vec<RecordedCatalogQuery> {
        self.queries.read().await.clone()
    }

    /// Clear recorded queries.
    pub async fn clear_recorded(&self) {
        self.queries.write().await.clear();
    }

    /// Get the number of queries performed.
    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }

    /// Number of detail fetches performed.
    pub async fn detail_fetch_count(&self) -> usize {
        self.queries
            .read()
            .await
            .iter()
            .filter(|q| matches!(q, RecordedCatalogQuery::FetchDetail { .. }))
            .count()
    }

    /// Record a query.
    async fn record(&self, query: RecordedCatalogQuery) {
        self.queries.write().await.push(query);
    }
}

#[async_trait]
impl CatalogApi for MockCatalogApi {
    async fn list_categories(&self, limit: u32) -> Result<Vec<Category>, CatalogError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedCatalogQuery::ListCategories { limit })
            .await;

        Ok(self
            .categories
            .read()
            .await
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn list_catalog_page(
        &self,
        offset: u32,
        limit: u32,
    ) -> Result<CatalogPage, CatalogError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedCatalogQuery::ListCatalogPage { offset, limit })
            .await;

        let catalog = self.catalog.read().await;
        let total = catalog.len();
        let results = catalog
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(fixtures::item)
            .collect();

        let (has_previous, has_next) = self.page_cursors.read().await.unwrap_or((
            offset > 0,
            (offset as usize + limit as usize) < total,
        ));

        Ok(CatalogPage {
            results,
            total_count: total as u32,
            has_previous,
            has_next,
        })
    }

    async fn list_members_of_category(
        &self,
        name: &str,
    ) -> Result<Vec<CategoryMember>, CatalogError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedCatalogQuery::ListMembersOfCategory {
            name: name.to_string(),
        })
        .await;

        if let Some(items) = self.members.read().await.get(name) {
            return Ok(items
                .iter()
                .cloned()
                .map(|item| CategoryMember { item, slot: 1 })
                .collect());
        }

        let known = self.categories.read().await.iter().any(|c| c.name == name);
        let catalog = self.catalog.read().await;
        let members: Vec<CategoryMember> = catalog
            .iter()
            .filter_map(|d| {
                d.categories
                    .iter()
                    .position(|c| c == name)
                    .map(|pos| CategoryMember {
                        item: fixtures::item(d),
                        slot: pos as u32 + 1,
                    })
            })
            .collect();

        if members.is_empty() && !known {
            return Err(CatalogError::NotFound(format!("Type {} not found", name)));
        }

        Ok(members)
    }

    async fn fetch_detail(&self, reference: &str) -> Result<CatalogItemDetail, CatalogError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedCatalogQuery::FetchDetail {
            reference: reference.to_string(),
        })
        .await;

        let delay = self.delays.read().await.get(reference).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing_references.read().await.contains(reference) {
            return Err(CatalogError::ApiError {
                status: 500,
                message: format!("Injected failure for {}", reference),
            });
        }

        self.catalog
            .read()
            .await
            .iter()
            .find(|d| fixtures::detail_reference(d.id) == reference)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("Pokemon {} not found", reference)))
    }
}
