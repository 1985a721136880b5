//! Browse API handlers: type filter, paging and the current view.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use pokedex_core::{engine::TypeFilterEntry, BrowseView, CycleOutcome, EngineError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SetLimitRequest {
    pub limit: u32,
}

#[derive(Debug, Serialize)]
pub struct TypeListResponse {
    pub types: Vec<TypeFilterEntry>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map engine errors onto HTTP statuses.
///
/// Fetch failures only ever expose the generic message.
fn engine_error(e: EngineError) -> ApiError {
    let status = match &e {
        EngineError::FetchFailed(_) => StatusCode::BAD_GATEWAY,
        EngineError::CategoryOutOfRange { .. } => StatusCode::NOT_FOUND,
        EngineError::InvalidLimit(_) => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

/// Turn a finished cycle into the view response.
async fn cycle_view(
    state: &AppState,
    outcome: Result<CycleOutcome, EngineError>,
) -> Result<Json<BrowseView>, ApiError> {
    match outcome.map_err(engine_error)? {
        CycleOutcome::Ready => {}
        CycleOutcome::Superseded => debug!("Cycle superseded, returning latest view"),
    }
    Ok(Json(state.engine().view().await))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/types
pub async fn list_types(State(state): State<Arc<AppState>>) -> Json<TypeListResponse> {
    let types = state.engine().view().await.types;
    Json(TypeListResponse {
        count: types.len(),
        types,
    })
}

/// POST /api/v1/types/reload
///
/// Re-fetch the type list. Clears every selection and recomputes the
/// unfiltered first page.
pub async fn reload_types(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BrowseView>, ApiError> {
    state
        .engine()
        .load_categories()
        .await
        .map_err(engine_error)?;
    let outcome = state.engine().refresh().await;
    cycle_view(&state, outcome).await
}

/// POST /api/v1/types/{index}/toggle
pub async fn toggle_type(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<Json<BrowseView>, ApiError> {
    let outcome = state.engine().toggle_category(index).await;
    cycle_view(&state, outcome).await
}

/// GET /api/v1/pokemon
pub async fn get_view(State(state): State<Arc<AppState>>) -> Json<BrowseView> {
    Json(state.engine().view().await)
}

/// POST /api/v1/pokemon/next
pub async fn next_page(State(state): State<Arc<AppState>>) -> Result<Json<BrowseView>, ApiError> {
    let outcome = state.engine().next_page().await;
    cycle_view(&state, outcome).await
}

/// POST /api/v1/pokemon/prev
pub async fn prev_page(State(state): State<Arc<AppState>>) -> Result<Json<BrowseView>, ApiError> {
    let outcome = state.engine().prev_page().await;
    cycle_view(&state, outcome).await
}

/// PUT /api/v1/pokemon/limit
pub async fn set_limit(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SetLimitRequest>,
) -> Result<Json<BrowseView>, ApiError> {
    let outcome = state.engine().set_limit(request.limit).await;
    cycle_view(&state, outcome).await
}

/// POST /api/v1/pokemon/refresh
pub async fn refresh(State(state): State<Arc<AppState>>) -> Result<Json<BrowseView>, ApiError> {
    let outcome = state.engine().refresh().await;
    cycle_view(&state, outcome).await
}
