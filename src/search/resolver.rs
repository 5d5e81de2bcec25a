use anyhow::{Context, Result};
use std::sync::Arc;

use crate::catalog::CatalogSource;
use crate::models::CatalogEntry;
use crate::search::alias::AliasTable;
use crate::search::normalize::normalize;
use crate::search::ranker::{self, ThresholdPolicy, RESULT_CAP};

/// Cap on exact-name hits for an alias.
pub const ALIAS_EXACT_CAP: usize = 10;

/// Turns a raw query string into a ranked, bounded list of catalog entries.
///
/// Holds no per-request state; one instance serves all requests.
pub struct QueryResolver {
    catalog: Arc<dyn CatalogSource>,
    aliases: Arc<AliasTable>,
    policy: ThresholdPolicy,
}

impl QueryResolver {
    pub fn new(catalog: Arc<dyn CatalogSource>, aliases: Arc<AliasTable>, policy: ThresholdPolicy) -> Self {
        Self {
            catalog,
            aliases,
            policy,
        }
    }

    /// Resolve `raw` against the catalog.
    ///
    /// - empty after normalization: the newest entries
    /// - alias hit: exact match on the canonical name, else substring match
    /// - otherwise: substring-or-fuzzy ranking
    ///
    /// Catalog failures are returned as-is; nothing partial is returned.
    pub fn search(&self, raw: &str) -> Result<Vec<CatalogEntry>> {
        let query = normalize(raw);

        if query.is_empty() {
            let mut newest = self
                .catalog
                .read_catalog_page(RESULT_CAP)
                .context("Failed to read default listing")?;
            newest.truncate(RESULT_CAP);
            return Ok(newest);
        }

        if let Some(canonical) = self.aliases.resolve(&query) {
            tracing::debug!("Alias hit: '{query}' -> '{canonical}'");
            return self.resolve_alias(canonical);
        }

        let threshold = self.policy.threshold(&query);
        let mut ranked = self
            .catalog
            .fuzzy_lookup(&query, threshold, RESULT_CAP)
            .context("Fuzzy lookup failed")?;

        // Sources may hand back loosely ordered rows
        ranker::sort_ranked(&mut ranked, RESULT_CAP);

        tracing::debug!(
            "Query '{query}' matched {} entries (threshold {threshold})",
            ranked.len()
        );

        Ok(ranker::strip_scores(ranked))
    }

    fn resolve_alias(&self, canonical: &str) -> Result<Vec<CatalogEntry>> {
        let mut exact = self
            .catalog
            .exact_name_lookup(canonical, ALIAS_EXACT_CAP)
            .context("Exact name lookup failed")?;
        if !exact.is_empty() {
            exact.truncate(ALIAS_EXACT_CAP);
            return Ok(exact);
        }

        tracing::debug!("No exact match for '{canonical}', falling back to substring");
        let mut fallback = self
            .catalog
            .substring_lookup(canonical, RESULT_CAP)
            .context("Substring lookup failed")?;
        fallback.truncate(RESULT_CAP);
        Ok(fallback)
    }
}
