//! Semantic search handler.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::instrument;

use quill_core::Note;

use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Query text. Absent or empty short-circuits to an empty result.
    #[serde(default)]
    pub q: String,
}

/// GET /api/search?q=, ranking every note against the query, best match
/// first.
///
/// The result count equals the store size, so this is a full ranking of the
/// collection rather than a page. Positions from the index are mapped back
/// onto the store's current ordering under the read lock, which writers
/// cannot hold mid-rebuild.
#[instrument(skip_all, fields(component = "api", op = "search_notes"))]
pub async fn search_notes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Note>>, ApiError> {
    if params.q.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let catalog = state.catalog.read().await;
    let limit = catalog.store.len();
    if limit == 0 {
        return Ok(Json(Vec::new()));
    }

    let hits = catalog.index.search(&params.q, limit).await?;
    let notes = hits
        .iter()
        .filter_map(|hit| catalog.store.list().get(hit.position).cloned())
        .collect();

    Ok(Json(notes))
}
