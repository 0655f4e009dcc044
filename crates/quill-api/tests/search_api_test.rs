//! Integration tests for the semantic search endpoint.
//!
//! Ranking assertions run against the deterministic mock backend (token
//! histograms), never a real embedding model.

mod helpers;

use std::sync::Arc;

use quill_api::{seed, AppState};
use quill_index::MockEmbeddingBackend;
use quill_store::NoteStore;
use serde_json::{json, Value};

use helpers::spawn_app;

async fn seeded_state(backend: MockEmbeddingBackend) -> AppState {
    let state = AppState::new(
        NoteStore::with_notes(seed::demo_notes()),
        Arc::new(backend),
    );
    state.reindex_all().await.unwrap();
    state
}

async fn empty_state(backend: MockEmbeddingBackend) -> AppState {
    let state = AppState::new(NoteStore::new(), Arc::new(backend));
    state.reindex_all().await.unwrap();
    state
}

async fn get_notes(client: &reqwest::Client, url: String) -> Vec<Value> {
    client.get(url).send().await.unwrap().json().await.unwrap()
}

#[tokio::test]
async fn test_empty_query_returns_empty_array() {
    let base = spawn_app(seeded_state(MockEmbeddingBackend::new()).await).await;
    let client = reqwest::Client::new();

    let results = get_notes(&client, format!("{}/api/search?q=", base)).await;
    assert!(results.is_empty());

    // Absent parameter behaves the same as an empty one.
    let results = get_notes(&client, format!("{}/api/search", base)).await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_on_empty_store_returns_empty_array() {
    let base = spawn_app(empty_state(MockEmbeddingBackend::new()).await).await;
    let results = get_notes(
        &reqwest::Client::new(),
        format!("{}/api/search?q=anything", base),
    )
    .await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_ranks_matching_note_first_and_returns_all() {
    let base = spawn_app(empty_state(MockEmbeddingBackend::new()).await).await;
    let client = reqwest::Client::new();

    let notes = [
        json!({"title": "Rust ownership model", "content": "borrow checker lifetimes aliasing", "tags": ["rust"]}),
        json!({"title": "Sourdough starter guide", "content": "flour water fermentation schedule", "tags": ["baking"]}),
        json!({"title": "Alpine hiking trails", "content": "elevation gain switchbacks scree", "tags": ["outdoors"]}),
    ];
    for note in &notes {
        client
            .post(format!("{}/api/notes", base))
            .json(note)
            .send()
            .await
            .unwrap();
    }

    let resp = client
        .get(format!("{}/api/search", base))
        .query(&[("q", "sourdough starter flour fermentation")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let results: Vec<Value> = resp.json().await.unwrap();

    // Full ranking: every note comes back, best match first.
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["id"], 2);
    assert_eq!(results[0]["title"], "Sourdough starter guide");
}

#[tokio::test]
async fn test_search_by_exact_seed_title_ranks_that_note_first() {
    let base = spawn_app(seeded_state(MockEmbeddingBackend::new()).await).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/api/search", base))
        .query(&[("q", "Exploring Docker for DevOps Automation")])
        .send()
        .await
        .unwrap();
    let results: Vec<Value> = resp.json().await.unwrap();

    assert_eq!(results.len(), 10);
    assert_eq!(results[0]["id"], 10);
}

#[tokio::test]
async fn test_search_reflects_latest_writes() {
    let base = spawn_app(empty_state(MockEmbeddingBackend::new()).await).await;
    let client = reqwest::Client::new();

    for note in [
        json!({"title": "alpha beta gamma", "content": "", "tags": []}),
        json!({"title": "delta epsilon zeta", "content": "", "tags": []}),
    ] {
        client
            .post(format!("{}/api/notes", base))
            .json(&note)
            .send()
            .await
            .unwrap();
    }

    let results = get_notes(&client, format!("{}/api/search?q=alpha+beta", base)).await;
    assert_eq!(results[0]["id"], 1);

    // After the delete the rebuilt index maps positions onto the survivor
    // only; no stale position can resolve to the removed note.
    client
        .delete(format!("{}/api/notes/1", base))
        .send()
        .await
        .unwrap();
    let results = get_notes(&client, format!("{}/api/search?q=alpha+beta", base)).await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], 2);
}

#[tokio::test]
async fn test_embedding_failure_surfaces_as_500() {
    let backend = MockEmbeddingBackend::new();
    let handle = backend.clone();
    let base = spawn_app(seeded_state(backend).await).await;

    handle.set_failing(true);
    let resp = reqwest::Client::new()
        .get(format!("{}/api/search?q=quantum", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Embedding error"));
}
