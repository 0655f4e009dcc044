//! quill-api - HTTP API server for quill
//!
//! Exposes the note CRUD endpoints and semantic search over one shared,
//! process-wide `Catalog` (note store + semantic index) guarded by a single
//! `RwLock`. Write handlers hold the write lock across mutation and index
//! rebuild; search holds the read lock across query embedding and position
//! mapping, so a search can never observe a store/index ordering mismatch.

pub mod handlers;
pub mod seed;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use tokio::sync::RwLock;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use quill_core::{EmbeddingBackend, Error, Result};
use quill_index::{FullRebuild, ReindexStrategy, SemanticIndex};
use quill_store::NoteStore;

use handlers::{create_note, delete_note, health, list_notes, search_notes, update_note};

// =============================================================================
// REQUEST ID (UUIDv7)
// =============================================================================

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically, which
/// helps when correlating request traces in logs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

// =============================================================================
// APPLICATION STATE
// =============================================================================

/// The shared mutable state: the note store and the semantic index that
/// mirrors it. Kept in one struct so one lock covers both, making
/// mutation + rebuild atomic relative to searches.
pub struct Catalog {
    pub store: NoteStore,
    pub index: SemanticIndex,
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RwLock<Catalog>>,
    pub reindex: Arc<dyn ReindexStrategy>,
}

impl AppState {
    /// Build state from a pre-populated store and an embedding backend.
    ///
    /// The index starts empty; call [`AppState::reindex_all`] before serving
    /// so searches see the seeded notes.
    pub fn new(store: NoteStore, backend: Arc<dyn EmbeddingBackend>) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Catalog {
                store,
                index: SemanticIndex::new(backend),
            })),
            reindex: Arc::new(FullRebuild),
        }
    }

    /// Rebuild the index from the full current note list.
    pub async fn reindex_all(&self) -> Result<()> {
        let mut guard = self.catalog.write().await;
        let catalog = &mut *guard;
        self.reindex
            .rebuild(catalog.store.list(), &mut catalog.index)
            .await
    }
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

/// HTTP-facing error, mapped from `quill_core::Error`.
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(Error),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            // Fixed message: the 404 body is part of the wire contract.
            Error::NoteNotFound(_) => ApiError::NotFound("Note not found".to_string()),
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// Build the application router.
///
/// Cross-origin requests are permitted from any origin: the service carries
/// no credentials and the web client is served from a different port.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/:id", put(update_note).delete(delete_note))
        .route("/api/search", get(search_notes))
        .route("/health", get(health))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(RequestBodyLimitLayer::new(1024 * 1024)) // 1 MB
        .with_state(state)
}
