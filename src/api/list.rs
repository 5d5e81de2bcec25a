use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::models::{CatalogEntry, ErrorResponse};
use crate::state::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn internal_error() -> ApiError {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal()))
}

/// Every `search` value in order, joined with `,`.
///
/// `?search=red&search=dead` reads as `"red,dead"`; no `search` key at all
/// reads as the empty query.
pub fn search_param(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .filter(|(key, _)| key == "search")
        .map(|(_, value)| value.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// GET /list             - newest 30 entries
/// GET /list?search=<q>  - ranked search, at most 30 entries
///
/// Any catalog failure becomes a generic 500; no partial results.
pub async fn list(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<CatalogEntry>>, ApiError> {
    let raw = search_param(&pairs);
    let resolver = state.resolver.clone();

    let entries = tokio::task::spawn_blocking(move || resolver.search(&raw))
        .await
        .map_err(|e| {
            tracing::error!("Search task failed: {e}");
            internal_error()
        })?
        .map_err(|e| {
            tracing::error!("Search failed: {e:#}");
            internal_error()
        })?;

    Ok(Json(entries))
}
