//! Catalog query engine.
//!
//! Combines multi-type filtering with offset pagination over the remote
//! catalog:
//! - `intersection`: Pokémon that have every selected type
//! - `pagination`: the visible (offset, limit) window and its flags
//! - `details`: concurrent detail fetches, ordered by id
//! - `query`: the engine owning inputs, cycles and published results

mod config;
mod details;
mod intersection;
mod pagination;
mod query;
mod types;
mod view;

pub use config::BrowseConfig;
pub use details::resolve_details;
pub use intersection::{compute_intersection, intersect_members};
pub use pagination::{apply_window, PageWindow, WindowSlice};
pub use query::CatalogQueryEngine;
pub use types::{
    CycleFailure, CycleOutcome, EngineError, EngineSnapshot, QueryPhase, QueryResult,
};
pub use view::{type_color, BrowseView, PokemonCard, TypeBadge, TypeFilterEntry, DEFAULT_TYPE_COLOR};
