//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the Pokédex server:
//! - HTTP request metrics (latency, counts, errors)
//! - Browse state (selected types, published items), collected on scrape
//! - Core catalog and query cycle metrics, registered from `pokedex_core`

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use regex_lite::Regex;

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "pokedex_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("pokedex_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "pokedex_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

// =============================================================================
// Browse Metrics (collected dynamically)
// =============================================================================

/// Number of types currently selected in the filter.
pub static SELECTED_TYPES: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "pokedex_selected_types",
        "Number of types currently selected in the filter",
    )
    .unwrap()
});

/// Number of Pokémon in the published result.
pub static PUBLISHED_ITEMS: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "pokedex_published_items",
        "Number of Pokémon in the currently published page",
    )
    .unwrap()
});

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    // HTTP
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();

    // Browse
    registry
        .register(Box::new(SELECTED_TYPES.clone()))
        .unwrap();
    registry
        .register(Box::new(PUBLISHED_ITEMS.clone()))
        .unwrap();

    // Core metrics (catalog API, query cycles)
    for metric in pokedex_core::metrics::all_metrics() {
        registry.register(metric).unwrap();
    }
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Collect dynamic metrics from current application state.
///
/// Called before encoding so the gauges reflect the engine right now.
pub async fn collect_dynamic_metrics(state: &crate::state::AppState) {
    let snapshot = state.engine().snapshot().await;
    SELECTED_TYPES.set(snapshot.categories.iter().filter(|c| c.selected).count() as i64);
    PUBLISHED_ITEMS.set(
        snapshot
            .result
            .as_ref()
            .map(|r| r.items.len() as i64)
            .unwrap_or(0),
    );
}

static NUMERIC_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\d+(/|$)").unwrap());

/// Normalize a path for metric labels (replace numeric segments with placeholders).
pub fn normalize_path(path: &str) -> String {
    NUMERIC_SEGMENT.replace_all(path, "/{id}$1").to_string()
}
