//! Discovery of the environments an evaluator can be built on.
//!
//! Registries are large and mix in entries that cannot run here, so discovery
//! is fail-soft: every registered id is instantiated, two actions are sampled,
//! and the id is kept only when one sample is small and both samples have the
//! same size. Failures never escape [`Catalog::discover`].

mod global;
mod probe;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::env::{DEFAULT_ENV, EnvRegistry};

pub use global::{get_or_init_catalog, init, init_with_config};
pub use probe::{Rejection, probe};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Always listed first and never probed.
    pub fallback: String,
    /// Exclusive upper bound on the footprint of one sampled action.
    pub max_sample_bytes: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_ENV.to_string(),
            max_sample_bytes: 5000,
        }
    }
}

/// Ordered, read-only list of usable environment ids.
///
/// The first entry is always the fallback id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    names: Vec<String>,
}

impl Catalog {
    pub fn discover(registry: &EnvRegistry, config: &CatalogConfig) -> Self {
        let mut names = vec![config.fallback.clone()];
        for id in registry.ids() {
            if id == config.fallback {
                continue;
            }
            if probe::accepts(registry, id, config.max_sample_bytes) {
                names.push(id.to_string());
            }
        }
        info!(
            candidates = registry.len(),
            usable = names.len(),
            "environment catalog built"
        );
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn fallback(&self) -> &str {
        self.names.first().map_or(DEFAULT_ENV, String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.names.iter().any(|name| name == id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            names: vec![DEFAULT_ENV.to_string()],
        }
    }
}
