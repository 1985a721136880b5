pub mod catalog;
pub mod config;
pub mod engine;
pub mod metrics;
pub mod testing;

pub use catalog::{
    CatalogApi, CatalogError, CatalogItem, CatalogItemDetail, CatalogPage, Category,
    CategoryMember, PokeApiClient, PokeApiConfig,
};
pub use config::{
    config_path_from_env, load_config, load_config_from_str, validate_config, Config,
    ConfigError, ServerConfig,
};
pub use engine::{
    BrowseConfig, BrowseView, CatalogQueryEngine, CycleOutcome, EngineError, EngineSnapshot,
    PageWindow, QueryPhase, QueryResult,
};
