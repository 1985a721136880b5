use pokedex_core::{CatalogQueryEngine, Config};
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    config: Config,
    engine: Arc<CatalogQueryEngine>,
}

impl AppState {
    pub fn new(config: Config, engine: Arc<CatalogQueryEngine>) -> Self {
        Self { config, engine }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn engine(&self) -> &CatalogQueryEngine {
        self.engine.as_ref()
    }
}
