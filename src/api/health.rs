use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::models::HealthResponse;
use crate::state::AppState;

/// GET /health - is the catalog reachable
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let catalog = state.catalog.clone();
    let probe = tokio::task::spawn_blocking(move || catalog.ping()).await;

    match probe {
        Ok(Ok(())) => (
            StatusCode::OK,
            Json(HealthResponse {
                ok: true,
                error: None,
            }),
        ),
        Ok(Err(e)) => {
            tracing::warn!("Health check failed: {e:#}");
            unavailable()
        }
        Err(e) => {
            tracing::warn!("Health check task failed: {e}");
            unavailable()
        }
    }
}

fn unavailable() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(HealthResponse {
            ok: false,
            error: Some("Catalog unavailable".to_string()),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::CatalogStore;
    use crate::config::Config;
    use crate::search::alias::AliasTable;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_health_ok() {
        let store = CatalogStore::from_records(Vec::new()).unwrap();
        let state = AppState::with_catalog(&Config::default(), Arc::new(store), AliasTable::builtin());
        let (status, Json(body)) = health(State(state)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.ok);
    }

    #[tokio::test]
    async fn test_health_reports_missing_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("catalog.json"), "[]").unwrap();
        let store = CatalogStore::open_or_create(dir.path()).unwrap();
        let state = AppState::with_catalog(&Config::default(), Arc::new(store), AliasTable::builtin());

        std::fs::remove_file(dir.path().join("catalog.json")).unwrap();
        let (status, Json(body)) = health(State(state)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.ok);
        assert_eq!(body.error.as_deref(), Some("Catalog unavailable"));
    }
}
