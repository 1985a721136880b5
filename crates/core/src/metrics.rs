//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Catalog API calls (count and latency per operation)
//! - Query cycles (outcome and duration)

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts};

// =============================================================================
// Catalog API Metrics
// =============================================================================

/// Catalog API request duration.
pub static CATALOG_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "pokedex_catalog_request_duration_seconds",
            "Duration of catalog API calls",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["operation"],
    )
    .unwrap()
});

/// Catalog API requests total.
pub static CATALOG_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "pokedex_catalog_requests_total",
            "Total catalog API requests",
        ),
        &["operation", "status"], // status: "success", "error"
    )
    .unwrap()
});

// =============================================================================
// Query Cycle Metrics
// =============================================================================

/// Query cycles total by outcome.
pub static QUERY_CYCLES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("pokedex_query_cycles_total", "Total query cycles"),
        &["outcome"], // "ready", "failed", "superseded"
    )
    .unwrap()
});

/// Query cycle duration in seconds.
pub static QUERY_CYCLE_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "pokedex_query_cycle_duration_seconds",
            "Duration of a full filter/page recomputation",
        )
        .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["mode"], // "filtered", "unfiltered"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(CATALOG_REQUEST_DURATION.clone()),
        Box::new(CATALOG_REQUESTS.clone()),
        Box::new(QUERY_CYCLES.clone()),
        Box::new(QUERY_CYCLE_DURATION.clone()),
    ]
}
