use std::sync::Arc;

use crate::catalog::store::CatalogStore;
use crate::catalog::CatalogSource;
use crate::config::Config;
use crate::search::alias::AliasTable;
use crate::search::resolver::QueryResolver;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogSource>,
    pub resolver: Arc<QueryResolver>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let catalog = CatalogStore::open_or_create(&config.data_dir)?;

        let aliases = match &config.aliases_path {
            Some(path) => AliasTable::builtin_with_file(path)?,
            None => AliasTable::builtin(),
        };
        tracing::info!("Alias table ready with {} entries", aliases.len());

        Ok(Self::with_catalog(&config, Arc::new(catalog), aliases))
    }

    /// Assemble state around an existing catalog source.
    pub fn with_catalog(config: &Config, catalog: Arc<dyn CatalogSource>, aliases: AliasTable) -> Self {
        let resolver = QueryResolver::new(catalog.clone(), Arc::new(aliases), config.threshold_policy);
        Self {
            catalog,
            resolver: Arc::new(resolver),
        }
    }
}
