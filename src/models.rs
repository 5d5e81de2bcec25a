use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog row as persisted in `catalog.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub price_eur: f64,
    #[serde(default)]
    pub cashback_percent: f64,
    pub platform: Option<String>,
    pub region: Option<String>,
    pub store: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A catalog entry as returned to callers (no timestamps, no scores)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub price_eur: f64,
    pub cashback_percent: f64,
    pub platform: Option<String>,
    pub region: Option<String>,
    pub store: Option<String>,
}

impl From<&CatalogRecord> for CatalogEntry {
    fn from(record: &CatalogRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            image_url: record.image_url.clone(),
            price_eur: record.price_eur,
            cashback_percent: record.cashback_percent,
            platform: record.platform.clone(),
            region: record.region.clone(),
            store: record.store.clone(),
        }
    }
}

/// A matched entry annotated with its ranking keys.
///
/// Only lives between matching and sorting; callers get the bare
/// [`CatalogEntry`] via [`RankedResult::into_entry`].
#[derive(Debug, Clone)]
pub struct RankedResult {
    pub entry: CatalogEntry,
    /// Whether the name contains the query as a literal substring
    pub contains: bool,
    /// Trigram similarity in [0, 1]
    pub score: f32,
}

impl RankedResult {
    pub fn into_entry(self) -> CatalogEntry {
        self.entry
    }
}

/// Error body for failed requests
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn internal() -> Self {
        Self {
            error: "Internal server error".to_string(),
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
