//! Engine types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{CatalogError, CatalogItemDetail, Category};

use super::pagination::PageWindow;

/// Errors surfaced by the query engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Any catalog call failed. The cause is kept for logging only.
    #[error("fetch failed")]
    FetchFailed(#[source] CatalogError),

    /// Toggle notification for an index outside the category list.
    #[error("Category index {index} out of range (have {len})")]
    CategoryOutOfRange { index: usize, len: usize },

    /// Page size must be positive.
    #[error("Invalid page limit: {0}")]
    InvalidLimit(u32),
}

impl From<CatalogError> for EngineError {
    fn from(e: CatalogError) -> Self {
        EngineError::FetchFailed(e)
    }
}

/// Published result of one query cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryResult {
    /// Details for the visible window, ascending by id.
    pub items: Vec<CatalogItemDetail>,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Where the engine is in its current cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum QueryPhase {
    /// No cycle has run yet.
    #[default]
    Idle,
    Loading,
    Ready,
    /// The latest cycle failed; the previous result is still published.
    Failed,
}

/// How a single cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Result published.
    Ready,
    /// A newer cycle was started before this one finished; result dropped.
    Superseded,
}

/// Last failure recorded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CycleFailure {
    pub cycle_id: u64,
    pub message: String,
    pub failed_at: DateTime<Utc>,
}

/// Point-in-time copy of the engine state.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EngineSnapshot {
    pub categories: Vec<Category>,
    pub window: PageWindow,
    pub phase: QueryPhase,
    /// Last published result. `None` until the first cycle succeeds.
    pub result: Option<QueryResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<CycleFailure>,
}

impl EngineSnapshot {
    pub fn loading(&self) -> bool {
        self.phase == QueryPhase::Loading
    }

    /// Names of the selected categories, in list order.
    pub fn selected_names(&self) -> Vec<String> {
        self.categories
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.name.clone())
            .collect()
    }
}
