//! Health and system info.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// GET /health: liveness plus a few operational facts.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let catalog = state.catalog.read().await;
    Json(json!({
        "status": "ok",
        "notes": catalog.store.len(),
        "embedding_model": catalog.index.model_name(),
    }))
}
