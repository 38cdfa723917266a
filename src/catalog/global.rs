use std::sync::OnceLock;

use tracing::debug;

use crate::catalog::{Catalog, CatalogConfig};
use crate::env::EnvRegistry;

static GLOBAL_CATALOG: OnceLock<Catalog> = OnceLock::new();

pub fn init() -> &'static Catalog {
    init_with_config(CatalogConfig::default())
}

/// Discover the built-in registry once per process.
///
/// Only the first call's config is used.
pub fn init_with_config(config: CatalogConfig) -> &'static Catalog {
    if let Some(catalog) = GLOBAL_CATALOG.get() {
        debug!("catalog already initialized, ignoring config");
        return catalog;
    }
    GLOBAL_CATALOG.get_or_init(|| Catalog::discover(&EnvRegistry::builtin(), &config))
}

pub fn get_or_init_catalog() -> &'static Catalog {
    GLOBAL_CATALOG.get_or_init(|| Catalog::discover(&EnvRegistry::builtin(), &CatalogConfig::default()))
}
