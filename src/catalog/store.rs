use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::catalog::CatalogSource;
use crate::models::{CatalogEntry, CatalogRecord, RankedResult};
use crate::search::ranker;

/// In-memory catalog snapshot loaded from `catalog.json`.
///
/// Read-only after construction; share it through an `Arc`.
pub struct CatalogStore {
    records: Vec<CatalogRecord>,
    /// Set only when the snapshot came from disk
    source_path: Option<PathBuf>,
}

impl CatalogStore {
    /// Load `<data_dir>/catalog.json`, or start empty if it does not exist.
    pub fn open_or_create(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        let path = data_dir.join("catalog.json");

        if !path.exists() {
            tracing::warn!("No catalog at {}, starting empty", path.display());
            return Ok(Self {
                records: Vec::new(),
                source_path: None,
            });
        }

        let data = std::fs::read_to_string(&path).context("Failed to read catalog")?;
        let records: Vec<CatalogRecord> =
            serde_json::from_str(&data).context("Failed to parse catalog")?;
        validate(&records).with_context(|| format!("Invalid catalog {}", path.display()))?;

        tracing::info!("Loaded {} catalog entries from {}", records.len(), path.display());

        Ok(Self {
            records,
            source_path: Some(path),
        })
    }

    /// Build a store from records already in memory.
    pub fn from_records(records: Vec<CatalogRecord>) -> Result<Self> {
        validate(&records)?;
        Ok(Self {
            records,
            source_path: None,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records filtered by `keep`, sorted alphabetically, capped.
    fn alphabetical<F>(&self, limit: usize, keep: F) -> Vec<CatalogEntry>
    where
        F: Fn(&str) -> bool,
    {
        let mut hits: Vec<CatalogEntry> = self
            .records
            .iter()
            .filter(|r| keep(r.name.to_lowercase().as_str()))
            .map(CatalogEntry::from)
            .collect();
        hits.sort_by(ranker::cmp_by_name);
        hits.truncate(limit);
        hits
    }
}

impl CatalogSource for CatalogStore {
    fn read_catalog_page(&self, limit: usize) -> Result<Vec<CatalogEntry>> {
        let mut newest: Vec<&CatalogRecord> = self.records.iter().collect();
        newest.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| ranker::cmp_name_keys(&a.name, &a.id, &b.name, &b.id))
        });
        Ok(newest.into_iter().take(limit).map(CatalogEntry::from).collect())
    }

    fn exact_name_lookup(&self, name: &str, limit: usize) -> Result<Vec<CatalogEntry>> {
        let needle = name.to_lowercase();
        Ok(self.alphabetical(limit, |n| n == needle))
    }

    fn substring_lookup(&self, fragment: &str, limit: usize) -> Result<Vec<CatalogEntry>> {
        let needle = fragment.to_lowercase();
        Ok(self.alphabetical(limit, |n| n.contains(&needle)))
    }

    fn fuzzy_lookup(&self, query: &str, threshold: f32, limit: usize) -> Result<Vec<RankedResult>> {
        let needle = query.to_lowercase();
        Ok(ranker::rank(&self.records, &needle, threshold, limit))
    }

    fn ping(&self) -> Result<()> {
        if let Some(path) = &self.source_path {
            std::fs::metadata(path)
                .with_context(|| format!("Catalog file {} is gone", path.display()))?;
        }
        Ok(())
    }
}

/// Names non-empty, prices finite and non-negative, ids unique.
fn validate(records: &[CatalogRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for r in records {
        if r.name.trim().is_empty() {
            bail!("Entry {} has an empty name", r.id);
        }
        if !r.price_eur.is_finite() || r.price_eur < 0.0 {
            bail!("Entry {} ({}) has invalid price {}", r.id, r.name, r.price_eur);
        }
        if !seen.insert(r.id) {
            bail!("Duplicate entry id {}", r.id);
        }
    }
    Ok(())
}
