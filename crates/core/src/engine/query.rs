//! Query engine: owns the filter selection and page window, runs query
//! cycles and publishes their results.
//!
//! Every input change starts a new cycle:
//! - Filtered (any type selected): fetch membership lists, intersect, slice
//!   the intersection to the window, resolve details
//! - Unfiltered: fetch one catalog page, resolve details, trust upstream
//!   cursors for prev/next
//!
//! Cycles are not cancelled. Each takes a sequence number when it starts and
//! only publishes if no newer cycle has been started since.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::catalog::{CatalogApi, CatalogError, Category};
use crate::metrics::{QUERY_CYCLES, QUERY_CYCLE_DURATION};

use super::config::BrowseConfig;
use super::details::resolve_details;
use super::intersection::compute_intersection;
use super::pagination::{apply_window, PageWindow};
use super::types::{
    CycleFailure, CycleOutcome, EngineError, EngineSnapshot, QueryPhase, QueryResult,
};
use super::view::BrowseView;

struct EngineState {
    categories: Vec<Category>,
    window: PageWindow,
    phase: QueryPhase,
    published: Option<QueryResult>,
    published_at: Option<chrono::DateTime<Utc>>,
    last_error: Option<CycleFailure>,
}

impl EngineState {
    fn selected(&self) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|c| c.selected)
            .cloned()
            .collect()
    }
}

/// Multi-type filtering and pagination engine.
pub struct CatalogQueryEngine {
    api: Arc<dyn CatalogApi>,
    config: BrowseConfig,
    state: RwLock<EngineState>,
    /// Id of the most recently started cycle.
    latest_cycle: AtomicU64,
}

impl CatalogQueryEngine {
    /// Create an engine with no categories loaded and nothing published.
    pub fn new(api: Arc<dyn CatalogApi>, config: BrowseConfig) -> Result<Self, EngineError> {
        let window = PageWindow::new(config.page_limit)?;

        Ok(Self {
            api,
            config,
            state: RwLock::new(EngineState {
                categories: Vec::new(),
                window,
                phase: QueryPhase::Idle,
                published: None,
                published_at: None,
                last_error: None,
            }),
            latest_cycle: AtomicU64::new(0),
        })
    }

    pub fn config(&self) -> &BrowseConfig {
        &self.config
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// Fetch the category list, replacing any previous one.
    ///
    /// All selections are cleared and the window goes back to the first
    /// page. Does not start a cycle.
    pub async fn load_categories(&self) -> Result<usize, EngineError> {
        let categories = self
            .api
            .list_categories(self.config.type_limit)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch categories");
                EngineError::FetchFailed(e)
            })?;

        let count = categories.len();
        let mut state = self.state.write().await;
        state.categories = categories
            .into_iter()
            .map(|c| Category {
                selected: false,
                ..c
            })
            .collect();
        state.window.reset();

        info!(count, "Loaded categories");
        Ok(count)
    }

    /// Flip the selection of the category at `index` and recompute.
    pub async fn toggle_category(&self, index: usize) -> Result<CycleOutcome, EngineError> {
        {
            let mut state = self.state.write().await;
            let len = state.categories.len();
            let category = state
                .categories
                .get_mut(index)
                .ok_or(EngineError::CategoryOutOfRange { index, len })?;
            category.selected = !category.selected;
            debug!(
                category = %category.name,
                selected = category.selected,
                "Category toggled"
            );
            state.window.reset();
        }

        self.refresh().await
    }

    /// Move one page forward and recompute.
    pub async fn next_page(&self) -> Result<CycleOutcome, EngineError> {
        self.state.write().await.window.next_page();
        self.refresh().await
    }

    /// Move one page back and recompute.
    pub async fn prev_page(&self) -> Result<CycleOutcome, EngineError> {
        self.state.write().await.window.prev_page();
        self.refresh().await
    }

    /// Change the page size, go back to the first page and recompute.
    pub async fn set_limit(&self, limit: u32) -> Result<CycleOutcome, EngineError> {
        self.state.write().await.window.set_limit(limit)?;
        self.refresh().await
    }

    // =========================================================================
    // Query cycle
    // =========================================================================

    /// Run one query cycle with the current inputs.
    ///
    /// On failure the previously published result stays in place and the
    /// error is recorded. A cycle overtaken by a newer one returns
    /// [`CycleOutcome::Superseded`] without touching published state,
    /// whether it succeeded or not.
    pub async fn refresh(&self) -> Result<CycleOutcome, EngineError> {
        // The id is taken under the lock so no newer cycle can publish
        // between issuing it and entering Loading.
        let (cycle_id, selected, window) = {
            let mut state = self.state.write().await;
            let cycle_id = self.latest_cycle.fetch_add(1, Ordering::SeqCst) + 1;
            state.phase = QueryPhase::Loading;
            (cycle_id, state.selected(), state.window)
        };

        let mode = if selected.is_empty() {
            "unfiltered"
        } else {
            "filtered"
        };
        debug!(
            cycle_id,
            mode,
            offset = window.offset(),
            limit = window.limit(),
            "Starting query cycle"
        );

        let start = Instant::now();
        let result = self.execute(&selected, window).await;
        QUERY_CYCLE_DURATION
            .with_label_values(&[mode])
            .observe(start.elapsed().as_secs_f64());

        let mut state = self.state.write().await;

        if self.latest_cycle.load(Ordering::SeqCst) != cycle_id {
            debug!(cycle_id, "Discarding superseded cycle");
            QUERY_CYCLES.with_label_values(&["superseded"]).inc();
            return Ok(CycleOutcome::Superseded);
        }

        match result {
            Ok(result) => {
                debug!(
                    cycle_id,
                    items = result.items.len(),
                    has_previous = result.has_previous,
                    has_next = result.has_next,
                    "Query cycle ready"
                );
                state.published = Some(result);
                state.published_at = Some(Utc::now());
                state.last_error = None;
                state.phase = QueryPhase::Ready;
                QUERY_CYCLES.with_label_values(&["ready"]).inc();
                Ok(CycleOutcome::Ready)
            }
            Err(e) => {
                // Upstream detail goes to the log only
                error!(cycle_id, error = %e, "Failed to fetch data");
                let err = EngineError::FetchFailed(e);
                state.last_error = Some(CycleFailure {
                    cycle_id,
                    message: err.to_string(),
                    failed_at: Utc::now(),
                });
                state.phase = QueryPhase::Failed;
                QUERY_CYCLES.with_label_values(&["failed"]).inc();
                Err(err)
            }
        }
    }

    async fn execute(
        &self,
        selected: &[Category],
        window: PageWindow,
    ) -> Result<QueryResult, CatalogError> {
        let api = self.api.as_ref();
        let max_parallel = self.config.max_concurrent_fetches;

        match compute_intersection(api, selected).await? {
            Some(matches) => {
                let page = apply_window(&matches, window);
                if page.slice.is_empty() && window.offset() > 0 {
                    warn!(
                        offset = window.offset(),
                        matches = matches.len(),
                        "Window starts past the end of the filtered results"
                    );
                }
                let items = resolve_details(api, &page.slice, max_parallel).await?;
                Ok(QueryResult {
                    items,
                    has_previous: page.has_previous,
                    has_next: page.has_next,
                })
            }
            None => {
                let page = api
                    .list_catalog_page(window.offset(), window.limit())
                    .await?;
                let items = resolve_details(api, &page.results, max_parallel).await?;
                Ok(QueryResult {
                    items,
                    has_previous: page.has_previous,
                    has_next: page.has_next,
                })
            }
        }
    }

    // =========================================================================
    // Outputs
    // =========================================================================

    /// Copy of the current engine state.
    pub async fn snapshot(&self) -> EngineSnapshot {
        let state = self.state.read().await;
        EngineSnapshot {
            categories: state.categories.clone(),
            window: state.window,
            phase: state.phase,
            result: state.published.clone(),
            published_at: state.published_at,
            last_error: state.last_error.clone(),
        }
    }

    /// Presentation-ready view of the current state.
    pub async fn view(&self) -> BrowseView {
        BrowseView::new(&self.snapshot().await, &self.config)
    }

    pub async fn categories(&self) -> Vec<Category> {
        self.state.read().await.categories.clone()
    }

    pub async fn window(&self) -> PageWindow {
        self.state.read().await.window
    }

    pub async fn phase(&self) -> QueryPhase {
        self.state.read().await.phase
    }
}
