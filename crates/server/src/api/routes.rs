use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::middleware::{metrics_middleware, METRICS_PATH};
use super::{browse, handlers};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Type filter
        .route("/types", get(browse::list_types))
        .route("/types/reload", post(browse::reload_types))
        .route("/types/{index}/toggle", post(browse::toggle_type))
        // Browsing
        .route("/pokemon", get(browse::get_view))
        .route("/pokemon/next", post(browse::next_page))
        .route("/pokemon/prev", post(browse::prev_page))
        .route("/pokemon/limit", put(browse::set_limit))
        .route("/pokemon/refresh", post(browse::refresh));

    Router::new()
        .nest("/api/v1", api_routes)
        .route(METRICS_PATH, get(handlers::metrics))
        .with_state(state)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
