//! Catalog read dependencies consumed by the query resolver.

pub mod store;

use anyhow::Result;

use crate::models::{CatalogEntry, RankedResult};

/// Read-only access to the catalog.
///
/// Implementations must be safe to call from many requests at once; the
/// resolver never writes through this trait.
pub trait CatalogSource: Send + Sync {
    /// Most recently added entries, newest first.
    fn read_catalog_page(&self, limit: usize) -> Result<Vec<CatalogEntry>>;

    /// Entries whose name equals `name` ignoring case, alphabetical.
    fn exact_name_lookup(&self, name: &str, limit: usize) -> Result<Vec<CatalogEntry>>;

    /// Entries whose name contains `fragment` ignoring case, alphabetical.
    fn substring_lookup(&self, fragment: &str, limit: usize) -> Result<Vec<CatalogEntry>>;

    /// Entries that contain `query` or whose similarity exceeds `threshold`,
    /// with their ranking keys, sorted by the tie-break chain.
    fn fuzzy_lookup(&self, query: &str, threshold: f32, limit: usize) -> Result<Vec<RankedResult>>;

    /// Liveness probe.
    fn ping(&self) -> Result<()> {
        Ok(())
    }
}
